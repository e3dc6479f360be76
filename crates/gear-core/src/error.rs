//! Error types for the GEAR license service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Licensing errors
    #[error("License type must be 'monthly' or 'lifetime'")]
    InvalidPlan(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Infrastructure errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
