use thiserror::Error;

/// Domain-specific errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Unsupported profile requested
    #[error("Unsupported profile: {0}")]
    UnsupportedProfile(String),

    /// Profile parsed but its tables are inconsistent
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::UnsupportedProfile("grc".to_string());
        assert_eq!(error.to_string(), "Unsupported profile: grc");

        let error = DomainError::InvalidProfile("no base vowels defined".to_string());
        assert_eq!(error.to_string(), "Invalid profile: no base vowels defined");
    }
}
