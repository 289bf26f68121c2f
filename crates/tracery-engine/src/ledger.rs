//! Per-view record of the identity currently displayed.

use std::collections::HashMap;

use crate::request::RequestKey;

/// Tracks which request identity each result view currently shows.
///
/// A request that matches the identity shown in its target view is a
/// no-op: the result would be byte-identical, so the rebuild is
/// suppressed before any provider traffic happens.
#[derive(Debug, Default)]
pub struct ViewLedger {
    views: HashMap<String, RequestKey>,
}

impl ViewLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `view` currently shows `key`.
    #[must_use]
    pub fn is_current(&self, view: &str, key: &RequestKey) -> bool {
        self.views.get(view) == Some(key)
    }

    /// The identity shown in `view`, if any result is displayed there.
    #[must_use]
    pub fn shown_in(&self, view: &str) -> Option<&RequestKey> {
        self.views.get(view)
    }

    /// Records that `view` now shows `key`.
    pub fn record(&mut self, view: impl Into<String>, key: RequestKey) {
        self.views.insert(view.into(), key);
    }

    /// Forgets what `view` shows, typically because it was closed.
    pub fn clear(&mut self, view: &str) {
        self.views.remove(view);
    }
}
