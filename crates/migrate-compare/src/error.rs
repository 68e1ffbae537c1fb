//! Error types for the comparison library.

use thiserror::Error;

/// Main error type for comparison operations.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog connection or query error with context.
    ///
    /// Produced by adapter implementations, never by the comparison core.
    /// The core only propagates it to the caller.
    #[error("Catalog error: {message}\n  Context: {context}")]
    Connection { message: String, context: String },

    /// Input that a catalog query should never produce (negative row counts,
    /// ragged sample rows, malformed descriptors).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Null profile requested on a sample with zero rows.
    #[error("Cannot compute a null profile over an empty sample")]
    EmptySample,

    /// Adapter requested for an unrecognized dialect tag.
    #[error("Unsupported dialect: '{0}'. Supported dialects: postgresql, snowflake, fabric")]
    UnsupportedDialect(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CompareError {
    /// Create a Connection error with context about where it occurred.
    pub fn connection(message: impl Into<String>, context: impl Into<String>) -> Self {
        CompareError::Connection {
            message: message.into(),
            context: context.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CompareError::InvalidInput(message.into())
    }
}

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_carries_context() {
        let err = CompareError::connection("timeout", "listing tables in schema public");
        let text = err.to_string();
        assert!(text.contains("timeout"));
        assert!(text.contains("listing tables in schema public"));
    }

    #[test]
    fn test_unsupported_dialect_names_supported_set() {
        let err = CompareError::UnsupportedDialect("oracle".to_string());
        assert!(err.to_string().contains("oracle"));
        assert!(err.to_string().contains("postgresql"));
    }
}
