//! Relation tree construction for the Tracery relation engine.
//!
//! Given a call-hierarchy root, this crate expands one direction of the
//! call graph into a tree of [`RelationNode`]s, bounded by an explicit
//! depth and protected against cycles. The underlying call-hierarchy
//! queries are consumed through the [`HierarchyClient`] trait so the
//! traversal can be driven by a language server or a scripted test
//! double.
//!
//! # Traversal contract
//!
//! - Children appear in the exact order the provider returned them, and
//!   each sibling is fully expanded before the next one starts.
//! - Cycle detection uses a per-path seen-set keyed by [`SymbolId`]. The
//!   set is cloned before each descent, so a shared helper may appear in
//!   two independent branches while a recursive chain is cut at its first
//!   repetition, which is emitted as a leaf that keeps its call sites.
//! - An absent or empty neighbour answer means "no edges", never an
//!   error.

mod builder;
mod client;
mod direction;
mod error;
mod identity;
mod node;
mod uri;

pub use builder::HierarchyBuilder;
pub use client::HierarchyClient;
pub use direction::Direction;
pub use error::GraphError;
pub use identity::SymbolId;
pub use node::RelationNode;
pub use uri::{path_to_uri, uri_to_path};
