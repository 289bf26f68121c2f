//! The relation request pipeline.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use tracery_config::{DirectionMode, Settings};
use tracery_graph::{Direction, HierarchyBuilder, RelationNode};
use tracery_refs::{ExclusionFilter, ReferenceAggregator};
use tracery_symbols::{DocumentSource, OutlineCache, SourceLocation, classify};

use crate::client::RelationClient;
use crate::error::EngineError;
use crate::guard::SingleFlight;
use crate::ledger::ViewLedger;
use crate::outcome::{EmptyReason, HierarchyOutcome, RelationOutcome};
use crate::request::RequestKey;

/// Tracing target for pipeline operations.
const PIPELINE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::pipeline");

/// Runs relation requests against an injected provider client.
///
/// The engine owns the view ledger and shares the single-flight guard
/// with its host. All request state beyond those two lives on the stack
/// of the [`RelationEngine::relate`] call and is discarded when it
/// returns; no call graph is ever cached across requests.
#[derive(Debug)]
pub struct RelationEngine {
    settings: Settings,
    flights: Arc<SingleFlight>,
    ledger: Mutex<ViewLedger>,
}

impl RelationEngine {
    /// Creates an engine with validated settings and a shared guard.
    ///
    /// # Errors
    /// Returns an error when the settings fail validation.
    pub fn new(settings: Settings, flights: Arc<SingleFlight>) -> Result<Self, EngineError> {
        settings.validate()?;
        Ok(Self {
            settings,
            flights,
            ledger: Mutex::new(ViewLedger::new()),
        })
    }

    /// The settings this engine runs with.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs one relation request for `symbol` at `location`, targeting
    /// the result view named `view`.
    ///
    /// Never returns an error: internal failures are logged and degrade
    /// to [`RelationOutcome::Empty`] with
    /// [`EmptyReason::LookupFailed`].
    pub fn relate<C: RelationClient>(
        &self,
        client: &mut C,
        view: &str,
        symbol: &str,
        location: &SourceLocation,
    ) -> RelationOutcome {
        let key = RequestKey::new(symbol, location.path(), location.display_line());
        if self.lock_ledger().is_current(view, &key) {
            debug!(
                target: PIPELINE_TARGET,
                %key,
                view,
                "view already shows this identity"
            );
            return RelationOutcome::Unchanged;
        }
        let Some(_permit) = self.flights.try_acquire(&key) else {
            info!(target: PIPELINE_TARGET, %key, "rejected: a request is already in flight");
            return RelationOutcome::Busy;
        };

        let outcome = match self.run(client, symbol, location) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    target: PIPELINE_TARGET,
                    %key,
                    %error,
                    "request degraded to an empty outcome"
                );
                RelationOutcome::Empty(EmptyReason::LookupFailed)
            }
        };
        if matches!(
            outcome,
            RelationOutcome::Hierarchy(_) | RelationOutcome::References(_)
        ) {
            self.lock_ledger().record(view, key);
        }
        outcome
    }

    /// Forgets the identity shown in `view`, typically on view close.
    pub fn forget_view(&self, view: &str) {
        self.lock_ledger().clear(view);
    }

    fn run<C: RelationClient>(
        &self,
        client: &mut C,
        symbol: &str,
        location: &SourceLocation,
    ) -> Result<RelationOutcome, EngineError> {
        let mut outlines = OutlineCache::new();
        let classification = classify(client, &mut outlines, location);
        if !classification.has_definition {
            return Ok(RelationOutcome::Empty(EmptyReason::NoDefinition));
        }

        let filter = ExclusionFilter::parse(&self.settings.exclude_suffixes);
        if classification.is_function {
            self.build_hierarchy(client, symbol, location, &filter)
        } else {
            // Per-request routing decision only; the configured direction
            // mode is left untouched.
            info!(
                target: PIPELINE_TARGET,
                symbol,
                "symbol is not function-like, aggregating references instead"
            );
            self.build_references(client, symbol, location, &filter)
        }
    }

    fn build_hierarchy<C: RelationClient>(
        &self,
        client: &mut C,
        symbol: &str,
        location: &SourceLocation,
        filter: &ExclusionFilter,
    ) -> Result<RelationOutcome, EngineError> {
        let direction = direction_of(self.settings.direction);
        let mut builder = HierarchyBuilder::new(client);
        let Some(root) = builder.prepare(location)? else {
            return Ok(RelationOutcome::Empty(EmptyReason::NoRelations));
        };
        let mut nodes = builder.build(&root, direction, self.settings.max_depth)?;

        prune_excluded(&mut nodes, filter);
        refine_names(client, &mut nodes);
        if nodes.is_empty() {
            return Ok(RelationOutcome::Empty(EmptyReason::NoRelations));
        }
        Ok(RelationOutcome::Hierarchy(HierarchyOutcome::new(
            symbol, direction, nodes,
        )))
    }

    fn build_references<C: RelationClient>(
        &self,
        client: &mut C,
        symbol: &str,
        location: &SourceLocation,
        filter: &ExclusionFilter,
    ) -> Result<RelationOutcome, EngineError> {
        let references = client.references(location)?.unwrap_or_default();
        if references.is_empty() {
            return Ok(RelationOutcome::Empty(EmptyReason::NoReferences));
        }
        let table = ReferenceAggregator::new(client).aggregate(symbol, &references, filter)?;
        if table.groups().is_empty() {
            return Ok(RelationOutcome::Empty(EmptyReason::NoReferences));
        }
        Ok(RelationOutcome::References(table))
    }

    fn lock_ledger(&self) -> MutexGuard<'_, ViewLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

const fn direction_of(mode: DirectionMode) -> Direction {
    match mode {
        DirectionMode::Incoming => Direction::Incoming,
        DirectionMode::Outgoing => Direction::Outgoing,
    }
}

/// Drops nodes (with their subtrees) whose path matches the filter.
fn prune_excluded(nodes: &mut Vec<RelationNode>, filter: &ExclusionFilter) {
    if filter.is_empty() {
        return;
    }
    nodes.retain(|node| !filter.excludes(node.path()));
    for node in nodes.iter_mut() {
        prune_excluded(node.children_mut(), filter);
    }
}

/// Replaces provider-reported names with the exact declared source text.
///
/// Read failures keep the provider name; the tree is still valid.
fn refine_names<S: DocumentSource>(source: &mut S, nodes: &mut [RelationNode]) {
    for node in nodes {
        match source.read_source(node.path(), node.selection()) {
            Ok(text) => {
                let declared = text.trim();
                if !declared.is_empty() {
                    node.set_name(declared);
                }
            }
            Err(error) => {
                debug!(
                    target: PIPELINE_TARGET,
                    path = %node.path(),
                    %error,
                    "keeping the provider-reported name"
                );
            }
        }
        refine_names(source, node.children_mut());
    }
}
