//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A template slot had no value in the supplied variables.
    #[error("Missing template variable: {0}")]
    MissingVariable(String),

    /// The template text could not be parsed, or its slots do not match
    /// the declared input variables.
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_display() {
        let error = DomainError::MissingVariable("question".to_string());
        assert_eq!(error.to_string(), "Missing template variable: question");
    }

    #[test]
    fn test_invalid_endpoint_display() {
        let error = DomainError::InvalidEndpoint("model_id must not be empty".to_string());
        assert_eq!(error.to_string(), "Invalid endpoint: model_id must not be empty");
    }
}
