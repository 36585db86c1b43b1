//! Error types for comprehension-core.

use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Authoring errors detected while an exercise is loaded.
///
/// Grading itself never fails; anything reported here means the content is
/// unusable and should be fixed by the author.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("answer {answer:?} contains no alternatives")]
    EmptyAlternatives { answer: String },

    #[error("question {question} has no correct answer")]
    NoCorrectAnswer { question: usize },

    #[error("exercise has no questions")]
    NoQuestions,

    #[error("invalid exercise definition: {0}")]
    InvalidDefinition(#[from] serde_json::Error),
}
