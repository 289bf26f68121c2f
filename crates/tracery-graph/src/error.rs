//! Error types for relation tree construction.

use std::sync::Arc;

use thiserror::Error;

/// Errors returned by relation tree operations.
#[derive(Debug, Clone, Error)]
pub enum GraphError {
    /// The underlying call-hierarchy provider failed.
    #[error("call hierarchy provider error: {0}")]
    Provider(String),

    /// An IO error occurred while converting locations.
    #[error("IO error: {message}")]
    Io {
        /// Description of the IO error.
        message: String,
        /// Underlying error wrapped in Arc for Clone support.
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl GraphError {
    /// Creates a new `Provider` error.
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Creates a new `Io` error.
    #[must_use]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }
}
