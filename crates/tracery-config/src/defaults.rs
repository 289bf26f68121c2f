//! Default values shared by the settings model.

use crate::logging::LogFormat;

/// Default call-hierarchy traversal depth per request.
pub const DEFAULT_MAX_DEPTH: u32 = 1;

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub(crate) const fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub(crate) fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

pub(crate) const fn default_log_format() -> LogFormat {
    LogFormat::Json
}
