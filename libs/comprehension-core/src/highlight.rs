//! Passage highlights.
//!
//! # Format
//! A passage marks highlightable spans with a number followed by the span text
//! wrapped in double asterisks:
//! ```text
//! The 1**treaty** was signed in 2**1648** after long talks.
//! ```
//! Every marker becomes a [`Highlight`]. The number ties the span to the
//! question with the same 1-based position.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

static MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\*\*(.*?)\*\*").expect("marker pattern is valid"));

/// Stable identity of a highlight: its ordinal position in the passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HighlightId(pub usize);

/// One markable span of the passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    id: HighlightId,
    number: u32,
    text: String,
    /// Byte range of the span inside [`Passage::plain_text`].
    span: Range<usize>,
    is_highlighted: bool,
}

impl Highlight {
    pub fn new(id: HighlightId, number: u32, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            id,
            number,
            text: text.into(),
            span,
            is_highlighted: false,
        }
    }

    pub fn id(&self) -> HighlightId {
        self.id
    }

    /// Number the author put in front of the marker.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn activate(&mut self) {
        self.is_highlighted = true;
    }

    pub fn deactivate(&mut self) {
        self.is_highlighted = false;
    }

    pub fn is_active(&self) -> bool {
        self.is_highlighted
    }
}

/// Source passage with its highlights.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Passage {
    plain_text: String,
    highlights: Vec<Highlight>,
}

impl Passage {
    /// Parse a passage, extracting every `N**text**` marker.
    ///
    /// Markers whose number does not fit are left in the text untouched.
    pub fn parse(source: &str) -> Self {
        let mut plain_text = String::with_capacity(source.len());
        let mut highlights = Vec::new();
        let mut last = 0;

        for caps in MARKER_REGEX.captures_iter(source) {
            let (Some(whole), Some(number), Some(inner)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            plain_text.push_str(&source[last..whole.start()]);
            last = whole.end();

            match number.as_str().parse::<u32>() {
                Ok(number) => {
                    let start = plain_text.len();
                    plain_text.push_str(inner.as_str());
                    let id = HighlightId(highlights.len());
                    highlights.push(Highlight::new(
                        id,
                        number,
                        inner.as_str(),
                        start..plain_text.len(),
                    ));
                }
                Err(_) => {
                    tracing::warn!(
                        "Ignoring highlight marker with oversized number: {}",
                        number.as_str()
                    );
                    plain_text.push_str(whole.as_str());
                }
            }
        }
        plain_text.push_str(&source[last..]);

        Self {
            plain_text,
            highlights,
        }
    }

    /// Passage text with the markers replaced by their span text.
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn highlights_mut(&mut self) -> &mut [Highlight] {
        &mut self.highlights
    }

    pub fn get(&self, id: HighlightId) -> Option<&Highlight> {
        self.highlights.get(id.0)
    }

    /// Highlights that precede and follow the blank of question `number`.
    ///
    /// Highlights numbered below the question come before it, all others
    /// after it. Both lists keep passage order.
    pub fn split_for_question(&self, number: u32) -> (Vec<&Highlight>, Vec<&Highlight>) {
        self.highlights.iter().partition(|h| h.number < number)
    }

    /// The context mark of question `number`, if the passage has one.
    pub fn context_for(&self, number: u32) -> Option<&Highlight> {
        self.highlights.iter().find(|h| h.number == number)
    }

    /// Ids of the highlights currently shown.
    pub fn active_ids(&self) -> Vec<HighlightId> {
        self.highlights
            .iter()
            .filter(|h| h.is_active())
            .map(Highlight::id)
            .collect()
    }

    /// Deactivate every highlight.
    pub fn reset(&mut self) {
        for highlight in &mut self.highlights {
            highlight.deactivate();
        }
    }
}
