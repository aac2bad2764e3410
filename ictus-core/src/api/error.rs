//! Error types for the API

use thiserror::Error;

use crate::domain::DomainError;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Profile could not be loaded or compiled
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
