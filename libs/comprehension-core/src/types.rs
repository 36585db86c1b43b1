//! Shared types for answer evaluation and scoring.

use serde::{Deserialize, Serialize};

/// Outcome of comparing learner input with one answer.
///
/// Variants are ordered by strength, so `max` picks the best result.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    #[default]
    NoMatch,
    CloseMatch,
    ExactMatch,
}

impl Evaluation {
    /// Whether this outcome counts towards the score.
    pub fn is_correct(self) -> bool {
        matches!(self, Self::ExactMatch | Self::CloseMatch)
    }
}

/// Matching policy applied by every answer of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub case_sensitive: bool,
    pub warn_spelling_errors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            warn_spelling_errors: true,
        }
    }
}

impl Settings {
    /// Number of edits tolerated for an input of `len` characters.
    ///
    /// One edit per started block of ten characters, or none when spelling
    /// tolerance is off.
    pub fn acceptable_typo_count(&self, len: usize) -> usize {
        if self.warn_spelling_errors {
            len / 10 + 1
        } else {
            0
        }
    }
}

/// Author-controlled behaviour of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Behaviour {
    pub enable_retry: bool,
    pub enable_solutions_button: bool,
    pub case_sensitive: bool,
    pub warn_spelling_errors: bool,
}

impl Default for Behaviour {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            enable_retry: true,
            enable_solutions_button: true,
            case_sensitive: settings.case_sensitive,
            warn_spelling_errors: settings.warn_spelling_errors,
        }
    }
}

impl Behaviour {
    /// Matching settings derived from the behaviour flags.
    pub fn settings(&self) -> Settings {
        Settings {
            case_sensitive: self.case_sensitive,
            warn_spelling_errors: self.warn_spelling_errors,
        }
    }
}

/// How a submitted blank was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correctness {
    Unanswered,
    Correct,
    CorrectWithTypo,
    Incorrect,
}

impl Correctness {
    /// Whether the blank counts towards the score.
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct | Self::CorrectWithTypo)
    }

    pub fn is_answered(self) -> bool {
        self != Self::Unanswered
    }
}

/// Overall feedback shown for a score percentage between `from` and `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRange {
    pub from: u32,
    pub to: u32,
    #[serde(default)]
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_ordering() {
        assert!(Evaluation::ExactMatch > Evaluation::CloseMatch);
        assert!(Evaluation::CloseMatch > Evaluation::NoMatch);
        assert_eq!(Evaluation::default(), Evaluation::NoMatch);
    }

    #[test]
    fn test_evaluation_counts_as_correct() {
        assert!(Evaluation::ExactMatch.is_correct());
        assert!(Evaluation::CloseMatch.is_correct());
        assert!(!Evaluation::NoMatch.is_correct());
    }

    #[test]
    fn test_typo_tolerance_scales_with_length() {
        let settings = Settings {
            case_sensitive: false,
            warn_spelling_errors: true,
        };
        assert_eq!(settings.acceptable_typo_count(0), 1);
        assert_eq!(settings.acceptable_typo_count(6), 1);
        assert_eq!(settings.acceptable_typo_count(10), 2);
        assert_eq!(settings.acceptable_typo_count(25), 3);

        let strict = Settings {
            warn_spelling_errors: false,
            ..settings
        };
        assert_eq!(strict.acceptable_typo_count(25), 0);
    }

    #[test]
    fn test_behaviour_defaults_when_fields_missing() {
        let behaviour: Behaviour = serde_json::from_str(r#"{"caseSensitive": true}"#).unwrap();
        assert!(behaviour.case_sensitive);
        assert!(behaviour.warn_spelling_errors);
        assert!(behaviour.enable_retry);
        assert!(behaviour.enable_solutions_button);
    }
}
