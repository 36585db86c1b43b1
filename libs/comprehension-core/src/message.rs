//! Feedback messages with references to passage highlights.
//!
//! # Format
//! ```text
//! Look at the second paragraph again;!!-1!! !!+2!!
//! ```
//! The text before the first `;` is shown to the learner. The part after it
//! lists highlight references: `!!-n!!` is the n-th highlight before the
//! blank counting backwards, `!!+n!!` (or `!!n!!`) the n-th highlight after
//! it. Anything else after the `;` is ignored. References written into the
//! text part still count and are removed from the displayed text.

use crate::highlight::{Highlight, HighlightId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!!([^!]*)!!").expect("token pattern is valid"));

/// A token together with the whitespace in front of it.
static INLINE_TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*!![^!]*!!").expect("inline token pattern is valid"));

/// Parsed reaction: display text plus unresolved highlight references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackMessage {
    text: String,
    refs_before: Vec<usize>,
    refs_after: Vec<usize>,
    resolved: BTreeSet<HighlightId>,
}

impl FeedbackMessage {
    /// Parse a reaction specification. Never fails; unusable tokens are
    /// skipped.
    pub fn parse(reaction: &str) -> Self {
        let (text, refs) = reaction.split_once(';').unwrap_or((reaction, ""));

        let mut refs_before = Vec::new();
        let mut refs_after = Vec::new();

        for caps in TOKEN_REGEX
            .captures_iter(text)
            .chain(TOKEN_REGEX.captures_iter(refs))
        {
            let token = caps[1].trim();
            match token.parse::<i64>() {
                Ok(offset) if offset < 0 => refs_before.push(offset.unsigned_abs() as usize),
                Ok(offset) if offset > 0 => refs_after.push(offset as usize),
                _ => tracing::warn!("Ignoring invalid highlight reference: {:?}", token),
            }
        }

        let leftover = TOKEN_REGEX.replace_all(refs, "");
        if !leftover.trim().is_empty() {
            tracing::debug!("Ignoring text after reference separator: {:?}", leftover.trim());
        }

        Self {
            text: INLINE_TOKEN_REGEX.replace_all(text, "").trim().to_string(),
            refs_before,
            refs_after,
            resolved: BTreeSet::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distances of the referenced highlights before the blank, as authored.
    pub fn refs_before(&self) -> &[usize] {
        &self.refs_before
    }

    /// Distances of the referenced highlights after the blank, as authored.
    pub fn refs_after(&self) -> &[usize] {
        &self.refs_after
    }

    pub fn resolved(&self) -> &BTreeSet<HighlightId> {
        &self.resolved
    }

    /// Resolve the references against the highlights around the blank.
    ///
    /// `before` and `after` are in passage order. References that point
    /// outside either list are dropped. Calling this again replaces the
    /// previous resolution.
    pub fn link_highlights(&mut self, before: &[&Highlight], after: &[&Highlight]) {
        self.resolved.clear();

        for &distance in &self.refs_before {
            match before.len().checked_sub(distance).map(|i| before[i]) {
                Some(highlight) => {
                    self.resolved.insert(highlight.id());
                }
                None => tracing::warn!(
                    "Dropping reference -{}: only {} highlights before the blank",
                    distance,
                    before.len()
                ),
            }
        }

        for &distance in &self.refs_after {
            match after.get(distance - 1) {
                Some(highlight) => {
                    self.resolved.insert(highlight.id());
                }
                None => tracing::warn!(
                    "Dropping reference +{}: only {} highlights after the blank",
                    distance,
                    after.len()
                ),
            }
        }
    }

    /// Activate every resolved highlight. Idempotent.
    pub fn activate_highlights(&self, highlights: &mut [Highlight]) {
        for highlight in highlights.iter_mut() {
            if self.resolved.contains(&highlight.id()) {
                highlight.activate();
            }
        }
    }
}
