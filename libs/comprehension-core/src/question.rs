//! Grading of a single blank against its accepted and rejected answers.

use crate::answer::Answer;
use crate::error::{ConfigError, Result};
use crate::highlight::{HighlightId, Passage};
use crate::types::{Correctness, Evaluation, Settings};
use serde::{Deserialize, Serialize};

/// Authored answer: alternatives plus the reaction shown when it matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerDefinition {
    pub text: String,
    pub reaction: String,
}

/// Authored question.
///
/// `targets` are accepted answers without a reaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionDefinition {
    pub question: String,
    pub targets: Vec<String>,
    pub correct_answers: Vec<AnswerDefinition>,
    pub incorrect_answers: Vec<AnswerDefinition>,
}

/// Result of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub correctness: Correctness,
    /// How the answer that produced this feedback matched the input.
    pub evaluation: Evaluation,
    /// Reaction text of the matched answer, empty if there is none.
    pub message: String,
    /// Highlights shown to back up the feedback.
    pub highlights: Vec<HighlightId>,
}

impl Feedback {
    fn unanswered() -> Self {
        Self {
            correctness: Correctness::Unanswered,
            evaluation: Evaluation::NoMatch,
            message: String::new(),
            highlights: Vec::new(),
        }
    }
}

/// A question with its blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    number: u32,
    prompt: String,
    correct: Vec<Answer>,
    incorrect: Vec<Answer>,
}

impl Question {
    /// Build question `number` (1-based) from its definition.
    pub fn from_definition(
        number: u32,
        definition: &QuestionDefinition,
        settings: Settings,
    ) -> Result<Self> {
        let mut correct = definition
            .targets
            .iter()
            .map(|target| Answer::new(target, "", settings))
            .collect::<Result<Vec<_>>>()?;
        for answer in &definition.correct_answers {
            correct.push(Answer::new(&answer.text, &answer.reaction, settings)?);
        }

        if correct.is_empty() {
            return Err(ConfigError::NoCorrectAnswer {
                question: number as usize,
            });
        }

        let incorrect = definition
            .incorrect_answers
            .iter()
            .map(|answer| Answer::new(&answer.text, &answer.reaction, settings))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            number,
            prompt: definition.question.clone(),
            correct,
            incorrect,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn correct_answers(&self) -> &[Answer] {
        &self.correct
    }

    pub fn incorrect_answers(&self) -> &[Answer] {
        &self.incorrect
    }

    /// Text filled in when solutions are revealed.
    pub fn solution(&self) -> &str {
        self.correct
            .iter()
            .find(|answer| !answer.applies_always())
            .and_then(|answer| answer.alternatives().first())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Resolve every answer's highlight references against the passage.
    pub fn link_highlights(&mut self, passage: &Passage) {
        let (before, after) = passage.split_for_question(self.number);
        for answer in self.correct.iter_mut().chain(self.incorrect.iter_mut()) {
            answer.link_highlights(&before, &after);
        }
    }

    /// Grade `entered` without touching the passage.
    pub fn check(&self, entered: &str) -> Feedback {
        self.judge(entered).0
    }

    /// Grade `entered` and show the highlights of the matched answer.
    pub fn grade(&self, entered: &str, passage: &mut Passage) -> Feedback {
        let (feedback, matched) = self.judge(entered);
        if let Some(answer) = matched {
            answer.activate_highlights(passage.highlights_mut());
        }
        feedback
    }

    fn judge(&self, entered: &str) -> (Feedback, Option<&Answer>) {
        let entered = entered.trim();
        if entered.is_empty() {
            return (Feedback::unanswered(), None);
        }

        match self.find_match(entered) {
            Some((correctness, evaluation, answer)) => {
                tracing::debug!(
                    "Question {} graded {:?} ({:?})",
                    self.number,
                    correctness,
                    evaluation
                );
                let feedback = Feedback {
                    correctness,
                    evaluation,
                    message: answer.message().text().to_string(),
                    highlights: answer.resolved_highlights().iter().copied().collect(),
                };
                (feedback, Some(answer))
            }
            None => {
                tracing::debug!("Question {} matched no answer", self.number);
                let feedback = Feedback {
                    correctness: Correctness::Incorrect,
                    evaluation: Evaluation::NoMatch,
                    message: String::new(),
                    highlights: Vec::new(),
                };
                (feedback, None)
            }
        }
    }

    /// Exact matches beat close ones, accepted answers beat rejected ones at
    /// the same strength, and always-applies answers come last.
    fn find_match(&self, entered: &str) -> Option<(Correctness, Evaluation, &Answer)> {
        let correct = best_match(specific(&self.correct), entered);
        let incorrect = best_match(specific(&self.incorrect), entered);

        let found = match (correct, incorrect) {
            (Some((Evaluation::ExactMatch, answer)), _) => {
                Some((Correctness::Correct, Evaluation::ExactMatch, answer))
            }
            (_, Some((Evaluation::ExactMatch, answer))) => {
                Some((Correctness::Incorrect, Evaluation::ExactMatch, answer))
            }
            (Some((evaluation, answer)), _) => {
                Some((Correctness::CorrectWithTypo, evaluation, answer))
            }
            (_, Some((evaluation, answer))) => Some((Correctness::Incorrect, evaluation, answer)),
            (None, None) => None,
        };

        found
            .or_else(|| {
                fallback(&self.incorrect, entered)
                    .map(|answer| (Correctness::Incorrect, Evaluation::ExactMatch, answer))
            })
            .or_else(|| {
                fallback(&self.correct, entered)
                    .map(|answer| (Correctness::Correct, Evaluation::ExactMatch, answer))
            })
    }
}

fn specific(answers: &[Answer]) -> impl Iterator<Item = &Answer> {
    answers.iter().filter(|answer| !answer.applies_always())
}

/// Strongest matching answer; the first one wins among equals.
fn best_match<'a>(
    answers: impl Iterator<Item = &'a Answer>,
    entered: &str,
) -> Option<(Evaluation, &'a Answer)> {
    let mut best: Option<(Evaluation, &Answer)> = None;
    for answer in answers {
        let evaluation = answer.evaluate(entered);
        if evaluation == Evaluation::NoMatch {
            continue;
        }
        if best.map_or(true, |(current, _)| evaluation > current) {
            best = Some((evaluation, answer));
        }
        if evaluation == Evaluation::ExactMatch {
            break;
        }
    }
    best
}

fn fallback<'a>(answers: &'a [Answer], entered: &str) -> Option<&'a Answer> {
    answers
        .iter()
        .filter(|answer| answer.applies_always())
        .find(|answer| answer.evaluate(entered) == Evaluation::ExactMatch)
}
