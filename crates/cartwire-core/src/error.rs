//! Error types for the cartwire core library
//!
//! This module defines the error handling system for cartwire,
//! using thiserror for ergonomic error definitions and anyhow for flexible error contexts.

use thiserror::Error;

/// Main error type for cartwire operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid transformation configuration, detected at construction time
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        property: Option<String>,
    },

    /// A field value could not be coerced to its declared type
    #[error("Type coercion failed: cannot coerce {value} to {expected} for property '{property}'")]
    TypeCoercion {
        property: String,
        expected: String,
        value: String,
    },

    /// A typed model could not be built from a property bag
    #[error("Model construction failed for {model}: {message}")]
    ModelConstruction {
        model: &'static str,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// JSON serialization and deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}
