//! The injected document lookup capability and its per-run cache.

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::{DocumentSymbol, Range};
use thiserror::Error;

use crate::location::SourceLocation;

/// Errors returned by document lookup operations.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// The underlying symbol provider failed.
    #[error("symbol provider error: {0}")]
    Provider(String),

    /// Reading source text for a document failed.
    #[error("failed to read source of '{path}': {message}")]
    Read {
        /// Document that could not be read.
        path: Utf8PathBuf,
        /// Description of the failure.
        message: String,
    },
}

impl LookupError {
    /// Creates a new `Provider` error.
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Creates a new `Read` error.
    #[must_use]
    pub fn read(path: impl Into<Utf8PathBuf>, message: impl Into<String>) -> Self {
        Self::Read {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Lookup capability over documents and their symbols.
///
/// Implementations typically forward to a language server. All operations
/// follow the same contract: `Ok(None)` means the provider has no answer
/// and is never an error; `Err` means the lookup itself failed.
pub trait DocumentSource {
    /// Resolves the definition of the symbol at `location`.
    ///
    /// # Errors
    /// Returns an error if the definition lookup fails.
    fn definition(
        &mut self,
        location: &SourceLocation,
    ) -> Result<Option<SourceLocation>, LookupError>;

    /// Returns the structural symbol outline of the document at `path`.
    ///
    /// # Errors
    /// Returns an error if the outline lookup fails.
    fn document_symbols(
        &mut self,
        path: &Utf8Path,
    ) -> Result<Option<Vec<DocumentSymbol>>, LookupError>;

    /// Reads the exact source text covered by `range` in the document at
    /// `path`.
    ///
    /// # Errors
    /// Returns an error if the document cannot be read.
    fn read_source(&mut self, path: &Utf8Path, range: Range) -> Result<String, LookupError>;
}

/// Per-run memo of document outline answers.
///
/// A cache instance is scoped to a single classification or aggregation
/// run; it only exists to avoid re-querying the same document several
/// times within one request and is never shared across requests.
#[derive(Debug, Default)]
pub struct OutlineCache {
    entries: HashMap<Utf8PathBuf, Option<Vec<DocumentSymbol>>>,
}

impl OutlineCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the outline for `path`, querying `source` on first use.
    ///
    /// # Errors
    /// Returns an error if the underlying outline lookup fails. Failed
    /// lookups are not cached, so a later call may retry.
    pub fn document_symbols<S: DocumentSource>(
        &mut self,
        source: &mut S,
        path: &Utf8Path,
    ) -> Result<Option<&[DocumentSymbol]>, LookupError> {
        if !self.entries.contains_key(path) {
            let answer = source.document_symbols(path)?;
            self.entries.insert(path.to_owned(), answer);
        }
        Ok(self.entries.get(path).and_then(|cached| cached.as_deref()))
    }
}
