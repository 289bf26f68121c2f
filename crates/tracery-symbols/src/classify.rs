//! Symbol kind classification.
//!
//! A relation request needs a single decision point: is the symbol under
//! the cursor function-like (traverse the call hierarchy) or not
//! (aggregate flat references)? Classification resolves the symbol's
//! definition and inspects the structural symbol enclosing the
//! *definition's* position, not the cursor position.

use tracing::debug;

use crate::location::SourceLocation;
use crate::outline::{enclosing_symbol_at, is_callable, range_contains};
use crate::source::{DocumentSource, LookupError, OutlineCache};

/// Tracing target for classification decisions.
const CLASSIFY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::classify");

/// Outcome of classifying the symbol at a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    /// Whether the symbol is function-like (function, method, or
    /// constructor).
    pub is_function: bool,
    /// Whether a definition was found at all. Without one the relation
    /// request has no meaningful root and must abort.
    pub has_definition: bool,
}

impl Classification {
    const fn non_function(has_definition: bool) -> Self {
        Self {
            is_function: false,
            has_definition,
        }
    }
}

/// Classifies the symbol at `location`.
///
/// Lookup failures are swallowed and reported as "no definition": the
/// caller then shows nothing, which is safer than showing a wrong graph.
pub fn classify<S: DocumentSource>(
    source: &mut S,
    cache: &mut OutlineCache,
    location: &SourceLocation,
) -> Classification {
    match try_classify(source, cache, location) {
        Ok(classification) => classification,
        Err(error) => {
            debug!(
                target: CLASSIFY_TARGET,
                path = %location.path(),
                error = %error,
                "classification lookup failed; treating symbol as unresolved"
            );
            Classification::default()
        }
    }
}

fn try_classify<S: DocumentSource>(
    source: &mut S,
    cache: &mut OutlineCache,
    location: &SourceLocation,
) -> Result<Classification, LookupError> {
    let Some(definition) = source.definition(location)? else {
        return Ok(Classification::default());
    };

    let position = definition.position();
    let Some(symbols) = cache.document_symbols(source, definition.path())? else {
        return Ok(Classification::non_function(true));
    };

    let Some(enclosing) = enclosing_symbol_at(symbols, position) else {
        return Ok(Classification::non_function(true));
    };

    // A definition that falls inside a symbol's body rather than on its
    // declared name is a local variable or similar, never a callable.
    if !range_contains(&enclosing.selection_range, position) {
        return Ok(Classification::non_function(true));
    }

    Ok(Classification {
        is_function: is_callable(enclosing.kind),
        has_definition: true,
    })
}
