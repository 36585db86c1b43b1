//! Answer definitions and typo-tolerant evaluation of learner input.

use crate::distance::edit_distance;
use crate::error::{ConfigError, Result};
use crate::highlight::{Highlight, HighlightId};
use crate::message::FeedbackMessage;
use crate::types::{Evaluation, Settings};
use std::collections::BTreeSet;

/// An answer the author expects for a blank, with the feedback it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    alternatives: Vec<String>,
    applies_always: bool,
    message: FeedbackMessage,
    settings: Settings,
}

impl Answer {
    /// Build an answer from its authored text and reaction.
    ///
    /// Alternatives are separated by `;` or `|`, which may be mixed. A blank
    /// `answer_text` makes an answer that applies to any non-blank input.
    pub fn new(answer_text: &str, reaction: &str, settings: Settings) -> Result<Self> {
        let applies_always = answer_text.trim().is_empty();

        let alternatives: Vec<String> = if applies_always {
            vec![String::new()]
        } else {
            answer_text
                .split([';', '|'])
                .map(str::trim)
                .filter(|alternative| !alternative.is_empty())
                .map(String::from)
                .collect()
        };

        if alternatives.is_empty() {
            return Err(ConfigError::EmptyAlternatives {
                answer: answer_text.to_string(),
            });
        }

        Ok(Self {
            alternatives,
            applies_always,
            message: FeedbackMessage::parse(reaction),
            settings,
        })
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// True if the authored answer text was blank.
    pub fn applies_always(&self) -> bool {
        self.applies_always
    }

    pub fn message(&self) -> &FeedbackMessage {
        &self.message
    }

    /// Highlights resolved by the last call to [`Answer::link_highlights`].
    pub fn resolved_highlights(&self) -> &BTreeSet<HighlightId> {
        self.message.resolved()
    }

    /// Classify `entered` against the alternatives.
    ///
    /// An exact match on any alternative wins; otherwise a close match within
    /// the typo tolerance is reported. Always-applies answers match any
    /// non-blank input exactly.
    pub fn evaluate(&self, entered: &str) -> Evaluation {
        if self.applies_always {
            return if entered.trim().is_empty() {
                Evaluation::NoMatch
            } else {
                Evaluation::ExactMatch
            };
        }

        let cleaned_entered = self.clean_text(entered);
        let acceptable_typo_count = self
            .settings
            .acceptable_typo_count(entered.chars().count());

        let mut best = Evaluation::NoMatch;
        for alternative in &self.alternatives {
            let cleaned_alternative = self.clean_text(alternative);

            if cleaned_alternative == cleaned_entered {
                return Evaluation::ExactMatch;
            }

            if edit_distance(&cleaned_entered, &cleaned_alternative) <= acceptable_typo_count {
                best = Evaluation::CloseMatch;
            }
        }

        best
    }

    /// Resolve the message's highlight references. Call once the passage
    /// highlights exist.
    pub fn link_highlights(&mut self, before: &[&Highlight], after: &[&Highlight]) {
        self.message.link_highlights(before, after);
    }

    /// Mark the linked highlights as shown.
    pub fn activate_highlights(&self, highlights: &mut [Highlight]) {
        self.message.activate_highlights(highlights);
    }

    fn clean_text(&self, text: &str) -> String {
        if self.settings.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        }
    }
}
