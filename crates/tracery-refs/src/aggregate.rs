//! Grouping of flat reference lists by enclosing function or file.

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use tracery_symbols::{
    DocumentSource, LookupError, OutlineCache, SourceLocation, enclosing_symbol_at, is_callable,
};

use crate::exclude::ExclusionFilter;
use crate::group::{GroupKind, ReferenceGroup, ReferenceTable};

const AGGREGATE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::aggregate");

/// Identity of a display group.
///
/// Function groups are keyed by the display name derived from source
/// text, so overloads whose declared names read identically merge into
/// one group even when the provider decorates outline names with
/// signatures. The raw outline name only participates when the read
/// fails or yields blank text.
#[derive(Debug, PartialEq, Eq, Hash)]
struct GroupKey {
    kind: GroupKind,
    name: String,
    path: Utf8PathBuf,
}

/// Turns a flat reference list into display groups.
///
/// The aggregator borrows a [`DocumentSource`] for the duration of one
/// request so the engine can keep a single provider connection for both
/// traversal and aggregation. Each [`ReferenceAggregator::aggregate`]
/// call is independent and caches outlines only within itself.
pub struct ReferenceAggregator<'s, S> {
    source: &'s mut S,
}

impl<'s, S: DocumentSource> ReferenceAggregator<'s, S> {
    /// Creates an aggregator over the given document source.
    #[must_use]
    pub fn new(source: &'s mut S) -> Self {
        Self { source }
    }

    /// Groups `references` to `symbol` by enclosing function or file.
    ///
    /// Every reference surviving `filter` lands in exactly one group.
    /// Groups appear in the order their first reference appeared in the
    /// input, and duplicate sites within a group are preserved.
    ///
    /// # Errors
    /// Returns an error if an outline lookup fails. Failures to read
    /// source text for a group label are not errors; the group falls
    /// back to the outline's declared name.
    pub fn aggregate(
        &mut self,
        symbol: &str,
        references: &[SourceLocation],
        filter: &ExclusionFilter,
    ) -> Result<ReferenceTable, LookupError> {
        let mut outlines = OutlineCache::new();
        let mut groups: Vec<ReferenceGroup> = Vec::new();
        let mut index: HashMap<GroupKey, usize> = HashMap::new();

        for reference in references {
            if filter.excludes(reference.path()) {
                continue;
            }
            let key = self.resolve_group(&mut outlines, reference)?;
            let line = reference.position().line + 1;
            let kind = key.kind;
            let display_name = key.name.clone();
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(ReferenceGroup::new(kind, display_name, reference.path()));
                groups.len() - 1
            });
            if let Some(group) = groups.get_mut(slot) {
                group.push(line, reference.path());
            }
        }

        debug!(
            target: AGGREGATE_TARGET,
            symbol,
            references = references.len(),
            groups = groups.len(),
            "aggregated references",
        );
        Ok(ReferenceTable::new(symbol, groups))
    }

    fn resolve_group(
        &mut self,
        outlines: &mut OutlineCache,
        reference: &SourceLocation,
    ) -> Result<GroupKey, LookupError> {
        let enclosing = outlines
            .document_symbols(self.source, reference.path())?
            .and_then(|symbols| enclosing_symbol_at(symbols, reference.position()))
            .filter(|symbol| is_callable(symbol.kind))
            .map(|symbol| (symbol.name.clone(), symbol.selection_range));

        let Some((name, selection)) = enclosing else {
            return Ok(GroupKey {
                kind: GroupKind::File,
                name: file_name_of(reference.path()),
                path: reference.path().to_owned(),
            });
        };

        let display_name = match self.source.read_source(reference.path(), selection) {
            Ok(text) if !text.trim().is_empty() => text.trim().to_owned(),
            Ok(_) => name,
            Err(error) => {
                debug!(
                    target: AGGREGATE_TARGET,
                    path = %reference.path(),
                    %error,
                    "using outline name for group label",
                );
                name
            }
        };
        Ok(GroupKey {
            kind: GroupKind::Function,
            name: display_name,
            path: reference.path().to_owned(),
        })
    }
}

fn file_name_of(path: &Utf8Path) -> String {
    path.file_name().unwrap_or_else(|| path.as_str()).to_owned()
}
