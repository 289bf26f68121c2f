//! Deepest-enclosing-symbol search over document outlines.

use lsp_types::{DocumentSymbol, Position, Range, SymbolKind};

/// Returns whether `range` contains `position`.
///
/// The end of the range is inclusive, matching the containment semantics
/// the symbol providers use for outline ranges.
#[must_use]
pub fn range_contains(range: &Range, position: Position) -> bool {
    let after_start = (position.line, position.character)
        >= (range.start.line, range.start.character);
    let before_end = (position.line, position.character) <= (range.end.line, range.end.character);
    after_start && before_end
}

/// Finds the deepest structural symbol whose range contains `position`.
///
/// At each tree level the first sibling (in provider order) whose range
/// contains the position wins and the search descends into its children;
/// later siblings are not scanned once a match is found. This replicates
/// the resolution order used for call-hierarchy node names and must not
/// be changed to a best-fit search.
#[must_use]
pub fn enclosing_symbol_at(
    symbols: &[DocumentSymbol],
    position: Position,
) -> Option<&DocumentSymbol> {
    let mut found = None;
    let mut level = symbols;
    while let Some(hit) = level
        .iter()
        .find(|symbol| range_contains(&symbol.range, position))
    {
        found = Some(hit);
        level = hit.children.as_deref().unwrap_or(&[]);
    }
    found
}

/// Returns whether a symbol kind is callable (function-like).
///
/// Callable symbols route a relation request through call-hierarchy
/// traversal; everything else goes through reference aggregation.
#[must_use]
pub const fn is_callable(kind: SymbolKind) -> bool {
    matches!(
        kind,
        SymbolKind::FUNCTION | SymbolKind::METHOD | SymbolKind::CONSTRUCTOR
    )
}
