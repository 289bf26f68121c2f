//! Terminal outcomes of a relation request.

use tracery_graph::{Direction, RelationNode};
use tracery_refs::ReferenceTable;

/// Why a request produced no result content.
///
/// All of these are informational: the request completed, there is
/// simply nothing to show. `LookupFailed` additionally means an internal
/// failure was degraded; the cause is logged at the degradation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The symbol has no resolvable definition.
    NoDefinition,
    /// The symbol is function-like but has no relations in the chosen
    /// direction.
    NoRelations,
    /// The symbol is not function-like and has no references.
    NoReferences,
    /// A provider lookup failed and the request degraded safely.
    LookupFailed,
}

impl std::fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NoDefinition => "no definition",
            Self::NoRelations => "no relations",
            Self::NoReferences => "no references",
            Self::LookupFailed => "lookup failed",
        };
        f.write_str(label)
    }
}

/// A completed call-hierarchy traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyOutcome {
    symbol: String,
    direction: Direction,
    nodes: Vec<RelationNode>,
}

impl HierarchyOutcome {
    /// Creates an outcome for a traversal rooted at `symbol`.
    #[must_use]
    pub fn new(symbol: impl Into<String>, direction: Direction, nodes: Vec<RelationNode>) -> Self {
        Self {
            symbol: symbol.into(),
            direction,
            nodes,
        }
    }

    /// The symbol the traversal was rooted at.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Direction the tree was expanded in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Direct relations of the root, each with its own subtree.
    #[must_use]
    pub fn nodes(&self) -> &[RelationNode] {
        &self.nodes
    }
}

/// Result of one relation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationOutcome {
    /// The symbol was function-like; a relation tree was built.
    Hierarchy(HierarchyOutcome),
    /// The symbol was not function-like; references were aggregated.
    References(ReferenceTable),
    /// The target view already shows this identity; nothing was rebuilt.
    Unchanged,
    /// Another request was in flight; this one was rejected, not queued.
    Busy,
    /// The request completed with nothing to show.
    Empty(EmptyReason),
}
