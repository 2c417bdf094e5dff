use std::io;
use thiserror::Error;

/// Crate-wide error type.
///
/// The routing engine itself is total over every input string; errors only
/// arise at the startup edge while loading configuration or lexicon files.
#[derive(Debug, Error)]
pub enum BrainError {
    /// Represents standard input/output errors (e.g., an unreadable lexicon file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., malformed lexicon JSON, empty keywords).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Clone for BrainError {
    fn clone(&self) -> Self {
        match self {
            BrainError::Io(e) => BrainError::Io(io::Error::new(e.kind(), e.to_string())),
            BrainError::Validation(s) => BrainError::Validation(s.clone()),
            BrainError::Config(s) => BrainError::Config(s.clone()),
        }
    }
}

impl From<serde_json::Error> for BrainError {
    fn from(err: serde_json::Error) -> Self {
        BrainError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for BrainError {
    fn from(err: validator::ValidationErrors) -> Self {
        BrainError::Validation(format!("Validation errors: {}", err))
    }
}

/// Convenience alias used by the fallible loading functions.
pub type Result<T> = std::result::Result<T, BrainError>;
