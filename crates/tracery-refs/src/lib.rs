//! Flat reference aggregation for the Tracery relation engine.
//!
//! When the symbol under the cursor is not function-like, the engine
//! falls back from call-hierarchy traversal to a flat reference query.
//! This crate turns that flat list into display groups: references that
//! land inside a function-like symbol are grouped under that function's
//! declared name, everything else is grouped under its file name.
//!
//! Grouping is stable: groups appear in the order their first reference
//! appeared in the input, and duplicate line/path pairs are preserved
//! because they represent distinct call sites.

mod aggregate;
mod exclude;
mod group;

pub use aggregate::ReferenceAggregator;
pub use exclude::ExclusionFilter;
pub use group::{GroupKind, ReferenceGroup, ReferenceTable};
