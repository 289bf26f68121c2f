//! Symbol resolution primitives for the Tracery relation engine.
//!
//! This crate owns the lookups that every relation request relies on:
//! resolving a symbol's definition, walking a document's structural symbol
//! outline, and recovering declared names from source text. The lookups are
//! consumed through the [`DocumentSource`] trait so callers can back them
//! with a language server, an index, or a scripted test double.
//!
//! # Core pieces
//!
//! - [`SourceLocation`] - a resolved position in a source file
//! - [`DocumentSource`] - the injected lookup capability
//! - [`enclosing_symbol_at`] - deepest-enclosing-symbol search over a
//!   document outline
//! - [`classify`] - decides whether a symbol is function-like, which routes
//!   a relation request to call-hierarchy traversal or to flat reference
//!   aggregation
//!
//! # Enclosing-symbol policy
//!
//! The outline search selects, at each tree level, the **first** sibling
//! (in provider order) whose range contains the target position, then
//! descends into its children. Later siblings are never considered once a
//! match is found. This mirrors the name-resolution behaviour of the
//! editors the engine serves and is a policy choice, not an optimisation.

mod classify;
mod location;
mod outline;
mod source;

pub use classify::{Classification, classify};
pub use location::SourceLocation;
pub use outline::{enclosing_symbol_at, is_callable, range_contains};
pub use source::{DocumentSource, LookupError, OutlineCache};
