//! Internal error type of the request pipeline.

use thiserror::Error;

use tracery_config::SettingsError;
use tracery_graph::GraphError;
use tracery_symbols::LookupError;

/// Errors raised while running a relation request.
///
/// These never escape to a host: the pipeline degrades every internal
/// failure to an empty outcome. They exist so the stages can use `?`
/// and so the degradation site can log the concrete cause.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The configuration was rejected.
    #[error("configuration rejected: {0}")]
    Settings(#[from] SettingsError),

    /// A call-hierarchy query failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A document lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The reference provider failed.
    #[error("reference provider error: {0}")]
    Provider(String),
}

impl EngineError {
    /// Creates a new `Provider` error.
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }
}
