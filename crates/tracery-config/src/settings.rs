//! The deserialisable settings model and its validation.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::defaults::default_max_depth;
use crate::logging::LogSettings;

/// Traversal direction requested for call-hierarchy expansion.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DirectionMode {
    /// Expand the callers of the requested symbol.
    #[default]
    Incoming,
    /// Expand the callees of the requested symbol.
    Outgoing,
}

/// When relation requests are triggered.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BehaviourMode {
    /// Build relations only on an explicit request.
    #[default]
    Manual,
    /// Rebuild relations as the selection moves.
    Live,
}

/// Complete engine configuration for one request.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    /// Traversal direction for function-like symbols.
    pub direction: DirectionMode,
    /// Trigger behaviour for relation requests.
    pub behaviour: BehaviourMode,
    /// Comma-separated file-name suffixes excluded from results.
    pub exclude_suffixes: String,
    /// Maximum call-hierarchy depth per request. Must be at least 1.
    pub max_depth: u32,
    /// Telemetry output settings.
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            direction: DirectionMode::default(),
            behaviour: BehaviourMode::default(),
            exclude_suffixes: String::new(),
            max_depth: default_max_depth(),
            log: LogSettings::default(),
        }
    }
}

impl Settings {
    /// Checks the invariants deserialisation cannot enforce.
    ///
    /// # Errors
    /// Returns an error when `max_depth` is zero.
    pub const fn validate(&self) -> Result<(), SettingsError> {
        if self.max_depth == 0 {
            return Err(SettingsError::depth_out_of_range(self.max_depth));
        }
        Ok(())
    }
}

/// Errors raised while validating [`Settings`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The configured traversal depth cannot express a single expansion.
    #[error("max_depth must be at least 1, got {value}")]
    DepthOutOfRange {
        /// The rejected value.
        value: u32,
    },
}

impl SettingsError {
    /// Creates a new `DepthOutOfRange` error.
    #[must_use]
    pub const fn depth_out_of_range(value: u32) -> Self {
        Self::DepthOutOfRange { value }
    }
}
