//! Request pipeline for the Tracery relation engine.
//!
//! One relation request runs end to end through this crate: the request
//! identity is checked against the view ledger, admitted through the
//! single-flight guard, classified, and routed either to call-hierarchy
//! traversal or to flat reference aggregation. Every failure path
//! degrades to a safe empty outcome; the engine never panics a host.
//!
//! Requests are strictly serialised. A second request arriving while one
//! is in flight is rejected with [`RelationOutcome::Busy`] and is never
//! queued.

mod client;
mod error;
mod guard;
mod ledger;
mod outcome;
mod pipeline;
mod render;
mod report;
mod request;
pub mod telemetry;

pub use client::{ReferenceClient, RelationClient};
pub use error::EngineError;
pub use guard::{FlightPermit, SingleFlight};
pub use ledger::ViewLedger;
pub use outcome::{EmptyReason, HierarchyOutcome, RelationOutcome};
pub use pipeline::RelationEngine;
pub use render::{render_hierarchy, render_references};
pub use report::hierarchy_report;
pub use request::RequestKey;

#[cfg(test)]
mod tests;
