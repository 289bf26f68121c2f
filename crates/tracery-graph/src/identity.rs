//! Cycle-detection identity for call-hierarchy items.

use camino::Utf8PathBuf;
use lsp_types::CallHierarchyItem;

use crate::uri::uri_to_path;

/// Identity of a symbol for cycle detection.
///
/// The key is the canonical path, the symbol name, and the zero-based
/// line where the definition starts. It exists solely to recognise a
/// symbol already visited on the current traversal path; it is never
/// used to compare displayed results, and two distinct identities may
/// well render with the same display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolId {
    path: Utf8PathBuf,
    name: String,
    line: u32,
}

impl SymbolId {
    /// Creates an identity from its components.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, name: impl Into<String>, line: u32) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            line,
        }
    }

    /// Derives the identity of a call-hierarchy item.
    #[must_use]
    pub fn from_item(item: &CallHierarchyItem) -> Self {
        Self::new(uri_to_path(&item.uri), item.name.clone(), item.range.start.line)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.name, self.line)
    }
}
