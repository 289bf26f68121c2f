//! Resolved source locations.

use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::{Position, Range};

/// A resolved position in a source file.
///
/// Locations are produced by the injected lookup capabilities and are
/// immutable once read. The range uses the provider's zero-based
/// coordinates; [`SourceLocation::display_line`] converts to the 1-based
/// line number shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    path: Utf8PathBuf,
    range: Range,
}

impl SourceLocation {
    /// Creates a new source location.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, range: Range) -> Self {
        Self {
            path: path.into(),
            range,
        }
    }

    /// Path to the file containing the location.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// The raw source range reported by the provider.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// The position at which the location starts.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.range.start
    }

    /// The 1-based line number used for display.
    #[must_use]
    pub const fn display_line(&self) -> u32 {
        self.range.start.line + 1
    }
}
