//! Client capabilities a relation request needs end to end.

use tracery_graph::HierarchyClient;
use tracery_symbols::{DocumentSource, SourceLocation};

use crate::error::EngineError;

/// Flat reference lookup.
pub trait ReferenceClient {
    /// Resolves every reference to the symbol at `location`.
    ///
    /// `Ok(None)` means the provider has no answer and is not an error.
    ///
    /// # Errors
    /// Returns an error if the reference request fails.
    fn references(
        &mut self,
        location: &SourceLocation,
    ) -> Result<Option<Vec<SourceLocation>>, EngineError>;
}

/// The full capability set of a relation request.
///
/// One provider connection backs classification, traversal, and
/// aggregation, so the engine takes a single client value implementing
/// all three seams. The blanket impl makes any such type a
/// `RelationClient` automatically.
pub trait RelationClient: HierarchyClient + DocumentSource + ReferenceClient {}

impl<T: HierarchyClient + DocumentSource + ReferenceClient> RelationClient for T {}
