//! Configuration model for the Tracery relation engine.
//!
//! Settings are plain deserialisable data: the crate validates invariants
//! the type system cannot express but performs no IO of its own. Hosts
//! load settings from whatever store they use and hand the engine a
//! [`Settings`] value per request.

mod defaults;
mod logging;
mod settings;

pub use defaults::{DEFAULT_LOG_FILTER, DEFAULT_MAX_DEPTH};
pub use logging::{LogFormat, LogFormatParseError, LogSettings};
pub use settings::{BehaviourMode, DirectionMode, Settings, SettingsError};
