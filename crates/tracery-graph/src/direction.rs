//! Traversal direction.

/// Direction of a relation traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Who calls or references this symbol.
    Incoming,
    /// What this symbol calls.
    Outgoing,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
        };
        f.write_str(label)
    }
}
