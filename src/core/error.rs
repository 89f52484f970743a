//! Error types for linkchain.

use thiserror::Error;

/// Result type alias for linkchain operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or measuring chains.
#[derive(Error, Debug)]
pub enum Error {
    // Argument errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Clock errors
    #[error("Clock unavailable: {0}")]
    Clock(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
