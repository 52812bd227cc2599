use std::io;
use thiserror::Error;

/// Crate-wide error type.
///
/// Only setup paths produce it (lexicon loading, configuration, logging). The per-turn
/// analysis and reply pipeline is infallible.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors (e.g., an unreadable lexicon file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (malformed JSON, out-of-range values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (bad lexicon, subscriber already set).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Config(format!("Invalid pattern: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

/// Convenience alias used by the setup paths.
pub type AppResult<T> = Result<T, AppError>;
