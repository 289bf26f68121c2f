//! Shared helpers for reference aggregation tests.

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::{DocumentSymbol, Position, Range, SymbolKind};

use tracery_symbols::{DocumentSource, LookupError, SourceLocation};

pub(super) fn span(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Range {
    Range {
        start: Position::new(start_line, start_col),
        end: Position::new(end_line, end_col),
    }
}

pub(super) fn at(path: &str, line: u32, column: u32) -> SourceLocation {
    SourceLocation::new(path, span(line, column, line, column + 1))
}

#[expect(
    deprecated,
    reason = "DocumentSymbol keeps a deprecated field that struct literals must populate"
)]
pub(super) fn symbol(name: &str, kind: SymbolKind, range: Range, selection: Range) -> DocumentSymbol {
    DocumentSymbol {
        name: name.to_owned(),
        detail: None,
        kind,
        tags: None,
        deprecated: None,
        range,
        selection_range: selection,
        children: None,
    }
}

/// Scripted [`DocumentSource`] whose answers are fixed up front.
///
/// `read_source` answers from `texts` per document and fails for any
/// document without a scripted text.
#[derive(Debug, Default)]
pub(super) struct ScriptedSource {
    pub(super) outlines: HashMap<Utf8PathBuf, Vec<DocumentSymbol>>,
    pub(super) texts: HashMap<Utf8PathBuf, String>,
    pub(super) outline_error: Option<LookupError>,
    pub(super) outline_queries: usize,
}

impl DocumentSource for ScriptedSource {
    fn definition(
        &mut self,
        _location: &SourceLocation,
    ) -> Result<Option<SourceLocation>, LookupError> {
        Ok(None)
    }

    fn document_symbols(
        &mut self,
        path: &Utf8Path,
    ) -> Result<Option<Vec<DocumentSymbol>>, LookupError> {
        self.outline_queries += 1;
        if let Some(error) = self.outline_error.clone() {
            return Err(error);
        }
        Ok(self.outlines.get(path).cloned())
    }

    fn read_source(&mut self, path: &Utf8Path, _range: Range) -> Result<String, LookupError> {
        self.texts
            .get(path)
            .cloned()
            .ok_or_else(|| LookupError::read(path, "no scripted source text"))
    }
}
