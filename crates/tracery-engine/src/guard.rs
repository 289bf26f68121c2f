//! Single-flight admission guard for relation requests.

use std::sync::{Mutex, PoisonError};

use crate::request::RequestKey;

/// Process-wide single-flight token.
///
/// At most one relation request may hold the token at a time. A request
/// that fails to acquire it is rejected immediately; nothing is ever
/// queued. The guard is an explicit value handed to the engine at
/// construction so hosts and tests control its scope.
#[derive(Debug, Default)]
pub struct SingleFlight {
    slot: Mutex<Option<RequestKey>>,
}

impl SingleFlight {
    /// Creates a guard with no request in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to admit `key`, rejecting if any request is in flight.
    ///
    /// The returned permit releases the token when dropped, so every
    /// exit path of the admitted request releases exactly once.
    #[must_use]
    pub fn try_acquire(&self, key: &RequestKey) -> Option<FlightPermit<'_>> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return None;
        }
        *slot = Some(key.clone());
        Some(FlightPermit { slot: &self.slot })
    }

    /// The key currently holding the token, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<RequestKey> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// RAII permit for an admitted request.
///
/// Dropping the permit releases the single-flight token, including on
/// panic unwinds.
#[must_use = "dropping the permit releases the single-flight token"]
#[derive(Debug)]
pub struct FlightPermit<'f> {
    slot: &'f Mutex<Option<RequestKey>>,
}

impl Drop for FlightPermit<'_> {
    fn drop(&mut self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }
}
