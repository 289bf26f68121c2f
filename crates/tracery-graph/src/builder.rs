//! Bounded-depth, cycle-safe relation tree construction.

use std::collections::HashSet;

use lsp_types::{
    CallHierarchyIncomingCallsParams, CallHierarchyItem, CallHierarchyOutgoingCallsParams,
    CallHierarchyPrepareParams, PartialResultParams, Range, TextDocumentIdentifier,
    TextDocumentPositionParams, WorkDoneProgressParams,
};
use tracing::debug;

use tracery_symbols::SourceLocation;

use crate::client::HierarchyClient;
use crate::direction::Direction;
use crate::error::GraphError;
use crate::identity::SymbolId;
use crate::node::RelationNode;
use crate::uri::path_to_uri;

/// Tracing target for traversal operations.
const BUILDER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::builder");

/// Builds relation trees from call-hierarchy queries.
///
/// The builder borrows its client for the duration of one request; all
/// traversal state lives on the stack of the build call and is discarded
/// when it returns.
pub struct HierarchyBuilder<'c, C> {
    client: &'c mut C,
}

impl<'c, C: HierarchyClient> HierarchyBuilder<'c, C> {
    /// Creates a builder over the given client.
    pub const fn new(client: &'c mut C) -> Self {
        Self { client }
    }

    /// Resolves the call-hierarchy root for a source location.
    ///
    /// Returns the first item the provider reports, or `None` when the
    /// position has no call-hierarchy item at all.
    ///
    /// # Errors
    /// Returns an error if the prepare request fails or the location
    /// cannot be expressed as a URI.
    pub fn prepare(
        &mut self,
        location: &SourceLocation,
    ) -> Result<Option<CallHierarchyItem>, GraphError> {
        let uri = path_to_uri(location.path())?;
        let params = CallHierarchyPrepareParams {
            text_document_position_params: TextDocumentPositionParams {
                text_document: TextDocumentIdentifier { uri },
                position: location.position(),
            },
            work_done_progress_params: WorkDoneProgressParams::default(),
        };

        let items = self
            .client
            .prepare_call_hierarchy(params)?
            .unwrap_or_default();
        Ok(items.into_iter().next())
    }

    /// Expands one direction of the relation graph below `root`.
    ///
    /// The root itself is not part of the result; the returned sequence
    /// holds its direct relations with their own subtrees, bounded by
    /// `max_depth` hops. The root's identity seeds the seen-set so a
    /// self-recursive root shows up as a leaf rather than recursing.
    ///
    /// # Errors
    /// Returns an error if a neighbour query fails.
    pub fn build(
        &mut self,
        root: &CallHierarchyItem,
        direction: Direction,
        max_depth: u32,
    ) -> Result<Vec<RelationNode>, GraphError> {
        let mut seen = HashSet::new();
        seen.insert(SymbolId::from_item(root));

        let nodes = self.collect_children(root, direction, max_depth, &seen)?;
        debug!(
            target: BUILDER_TARGET,
            root = %root.name,
            %direction,
            max_depth,
            nodes = nodes.iter().map(RelationNode::subtree_size).sum::<usize>(),
            "relation tree built"
        );
        Ok(nodes)
    }

    fn collect_children(
        &mut self,
        item: &CallHierarchyItem,
        direction: Direction,
        remaining_depth: u32,
        seen: &HashSet<SymbolId>,
    ) -> Result<Vec<RelationNode>, GraphError> {
        if remaining_depth == 0 {
            return Ok(Vec::new());
        }

        let calls = self.neighbour_calls(item, direction)?;
        let mut nodes = Vec::with_capacity(calls.len());

        for (neighbour, from_ranges) in calls {
            let identity = SymbolId::from_item(&neighbour);
            let call_sites = display_lines(&from_ranges);

            // Already on this path: keep the edge, cut the recursion.
            if seen.contains(&identity) {
                nodes.push(RelationNode::leaf(&neighbour, call_sites));
                continue;
            }

            let mut next_seen = seen.clone();
            next_seen.insert(identity);
            let children =
                self.collect_children(&neighbour, direction, remaining_depth - 1, &next_seen)?;
            nodes.push(RelationNode::from_item(&neighbour, call_sites, children));
        }

        Ok(nodes)
    }

    fn neighbour_calls(
        &mut self,
        item: &CallHierarchyItem,
        direction: Direction,
    ) -> Result<Vec<(CallHierarchyItem, Vec<Range>)>, GraphError> {
        match direction {
            Direction::Incoming => {
                let params = CallHierarchyIncomingCallsParams {
                    item: item.clone(),
                    work_done_progress_params: WorkDoneProgressParams::default(),
                    partial_result_params: PartialResultParams::default(),
                };
                let calls = self.client.incoming_calls(params)?.unwrap_or_default();
                Ok(calls
                    .into_iter()
                    .map(|call| (call.from, call.from_ranges))
                    .collect())
            }
            Direction::Outgoing => {
                let params = CallHierarchyOutgoingCallsParams {
                    item: item.clone(),
                    work_done_progress_params: WorkDoneProgressParams::default(),
                    partial_result_params: PartialResultParams::default(),
                };
                let calls = self.client.outgoing_calls(params)?.unwrap_or_default();
                Ok(calls
                    .into_iter()
                    .map(|call| (call.to, call.from_ranges))
                    .collect())
            }
        }
    }
}

/// Converts call-site ranges to 1-based display lines.
fn display_lines(ranges: &[Range]) -> Vec<u32> {
    ranges
        .iter()
        .map(|range: &Range| range.start.line + 1)
        .collect()
}
