//! Client abstraction for call-hierarchy queries.

use lsp_types::{
    CallHierarchyIncomingCall, CallHierarchyIncomingCallsParams, CallHierarchyItem,
    CallHierarchyOutgoingCall, CallHierarchyOutgoingCallsParams, CallHierarchyPrepareParams,
};

use crate::error::GraphError;

/// Client abstraction for call-hierarchy operations.
///
/// Every operation may suspend while the backing provider works; none of
/// them is assumed atomic. `Ok(None)` is a valid answer everywhere and
/// means the provider has nothing to report.
pub trait HierarchyClient {
    /// Prepares call-hierarchy items at the given position.
    ///
    /// # Errors
    /// Returns an error if the provider request fails.
    fn prepare_call_hierarchy(
        &mut self,
        params: CallHierarchyPrepareParams,
    ) -> Result<Option<Vec<CallHierarchyItem>>, GraphError>;

    /// Queries who calls the given item.
    ///
    /// # Errors
    /// Returns an error if the provider request fails.
    fn incoming_calls(
        &mut self,
        params: CallHierarchyIncomingCallsParams,
    ) -> Result<Option<Vec<CallHierarchyIncomingCall>>, GraphError>;

    /// Queries what the given item calls.
    ///
    /// # Errors
    /// Returns an error if the provider request fails.
    fn outgoing_calls(
        &mut self,
        params: CallHierarchyOutgoingCallsParams,
    ) -> Result<Option<Vec<CallHierarchyOutgoingCall>>, GraphError>;
}
