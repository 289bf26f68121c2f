//! Relation tree node representation.

use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::{CallHierarchyItem, Range};

use crate::uri::uri_to_path;

/// A node in the relation tree.
///
/// A node is owned exclusively by the traversal that created it and is
/// never mutated after the build call returns it, except for the
/// display-name refinement the engine applies before rendering. The
/// `children` sequence is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationNode {
    name: String,
    path: Utf8PathBuf,
    line: u32,
    selection: Range,
    call_sites: Vec<u32>,
    children: Vec<RelationNode>,
}

impl RelationNode {
    /// Creates a node for a call-hierarchy item with the given children.
    #[must_use]
    pub fn from_item(
        item: &CallHierarchyItem,
        call_sites: Vec<u32>,
        children: Vec<Self>,
    ) -> Self {
        Self {
            name: item.name.clone(),
            path: uri_to_path(&item.uri),
            line: item.range.start.line + 1,
            selection: item.selection_range,
            call_sites,
            children,
        }
    }

    /// Creates a leaf node for a call-hierarchy item.
    ///
    /// Leaves are emitted for symbols already present on the current
    /// traversal path: the edge is kept, recursion is not.
    #[must_use]
    pub fn leaf(item: &CallHierarchyItem, call_sites: Vec<u32>) -> Self {
        Self::from_item(item, call_sites, Vec::new())
    }

    /// Display name of the symbol.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    ///
    /// Used when the exact declared name recovered from source text
    /// differs from the provider-reported one.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Path to the file defining the symbol.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// 1-based line of the symbol's definition.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Range of the symbol's declared name.
    #[must_use]
    pub const fn selection(&self) -> Range {
        self.selection
    }

    /// 1-based lines of the call sites connecting this node to its
    /// parent. Duplicates are preserved; they are distinct call sites.
    #[must_use]
    pub fn call_sites(&self) -> &[u32] {
        &self.call_sites
    }

    /// Child nodes, in provider order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Mutable access to the child nodes, for pruning and display-name
    /// refinement.
    pub const fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    /// Total number of nodes in this subtree, including this node.
    #[must_use]
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Self::subtree_size)
            .sum::<usize>()
    }
}
