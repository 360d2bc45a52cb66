//! Error types for pactum operations.

use thiserror::Error;

/// Result type alias for pactum operations.
pub type PactumResult<T> = Result<T, PactumError>;

/// Main error type for all pactum operations.
#[derive(Error, Debug)]
pub enum PactumError {
    /// Authentication failed.
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// Input validation failed.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Entity not found.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// LLM operation failed.
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Model output could not be interpreted.
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Database operation failed.
    #[error("Database error: {message}")]
    Database { message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PactumError {
    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an LLM error.
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            source: None,
        }
    }

    /// Create an LLM error wrapping an underlying cause.
    pub fn llm_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Llm {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PactumError::llm("model unavailable");
        assert_eq!(err.to_string(), "LLM error: model unavailable");

        let err = PactumError::parse("no JSON object found");
        assert_eq!(err.to_string(), "Parse error: no JSON object found");
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            PactumError::database("locked"),
            PactumError::Database { .. }
        ));
        assert!(matches!(
            PactumError::not_found("contract 7"),
            PactumError::NotFound { .. }
        ));
    }
}
