//! Answer evaluation engine for reading-comprehension exercises.
//!
//! Provides:
//! - Typo-tolerant answer matching (Levenshtein distance)
//! - Feedback reactions linked to highlighted passage spans
//! - Passage parsing for `N**text**` highlight markers
//! - Exercise grading state and scoring

pub mod answer;
pub mod distance;
pub mod error;
pub mod exercise;
pub mod highlight;
pub mod message;
pub mod question;
pub mod types;

pub use answer::Answer;
pub use distance::edit_distance;
pub use error::{ConfigError, Result};
pub use exercise::{Exercise, ExerciseDefinition, QuestionState};
pub use highlight::{Highlight, HighlightId, Passage};
pub use message::FeedbackMessage;
pub use question::{AnswerDefinition, Feedback, Question, QuestionDefinition};
pub use types::{Behaviour, Correctness, Evaluation, FeedbackRange, Settings};
