//! Shared helpers for engine pipeline tests.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::{
    CallHierarchyIncomingCall, CallHierarchyIncomingCallsParams, CallHierarchyItem,
    CallHierarchyOutgoingCall, CallHierarchyOutgoingCallsParams, CallHierarchyPrepareParams,
    DocumentSymbol, Position, Range, SymbolKind, Uri,
};

use tracery_config::Settings;
use tracery_graph::{GraphError, HierarchyClient};
use tracery_symbols::{DocumentSource, LookupError, SourceLocation};

use crate::client::ReferenceClient;
use crate::error::EngineError;
use crate::guard::SingleFlight;
use crate::pipeline::RelationEngine;

pub(super) fn span(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Range {
    Range {
        start: Position::new(start_line, start_col),
        end: Position::new(end_line, end_col),
    }
}

pub(super) fn at(path: &str, line: u32, column: u32) -> SourceLocation {
    SourceLocation::new(path, span(line, column, line, column + 1))
}

pub(super) fn item(name: &str, path: &str, line: u32) -> CallHierarchyItem {
    let uri = Uri::from_str(&format!("file://{path}")).expect("valid test URI");
    CallHierarchyItem {
        name: name.to_owned(),
        kind: SymbolKind::FUNCTION,
        tags: None,
        detail: None,
        uri,
        range: span(line, 0, line, 1),
        selection_range: span(line, 4, line, 8),
        data: None,
    }
}

pub(super) fn call_from(caller: CallHierarchyItem, lines: &[u32]) -> CallHierarchyIncomingCall {
    CallHierarchyIncomingCall {
        from: caller,
        from_ranges: lines.iter().map(|&line| span(line, 2, line, 3)).collect(),
    }
}

pub(super) fn call_to(callee: CallHierarchyItem, lines: &[u32]) -> CallHierarchyOutgoingCall {
    CallHierarchyOutgoingCall {
        to: callee,
        from_ranges: lines.iter().map(|&line| span(line, 2, line, 3)).collect(),
    }
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

pub(super) fn engine() -> RelationEngine {
    engine_with(Settings::default())
}

pub(super) fn engine_with(settings: Settings) -> RelationEngine {
    RelationEngine::new(settings, Arc::new(SingleFlight::new())).expect("settings must be valid")
}

/// Scripted provider implementing every capability a request needs.
#[derive(Debug, Default)]
pub(super) struct ScriptedProvider {
    pub(super) definition: Option<SourceLocation>,
    pub(super) outlines: HashMap<Utf8PathBuf, Vec<DocumentSymbol>>,
    pub(super) texts: HashMap<Utf8PathBuf, String>,
    pub(super) roots: Vec<CallHierarchyItem>,
    pub(super) incoming: HashMap<String, Vec<CallHierarchyIncomingCall>>,
    pub(super) outgoing: HashMap<String, Vec<CallHierarchyOutgoingCall>>,
    pub(super) incoming_error: Option<GraphError>,
    pub(super) references: Vec<SourceLocation>,
    pub(super) reference_error: Option<String>,
    pub(super) reference_queries: usize,
    pub(super) incoming_queries: usize,
}

impl DocumentSource for ScriptedProvider {
    fn definition(
        &mut self,
        _location: &SourceLocation,
    ) -> Result<Option<SourceLocation>, LookupError> {
        Ok(self.definition.clone())
    }

    fn document_symbols(
        &mut self,
        path: &Utf8Path,
    ) -> Result<Option<Vec<DocumentSymbol>>, LookupError> {
        Ok(self.outlines.get(path).cloned())
    }

    fn read_source(&mut self, path: &Utf8Path, _range: Range) -> Result<String, LookupError> {
        self.texts
            .get(path)
            .cloned()
            .ok_or_else(|| LookupError::read(path, "no scripted source text"))
    }
}

impl HierarchyClient for ScriptedProvider {
    fn prepare_call_hierarchy(
        &mut self,
        _params: CallHierarchyPrepareParams,
    ) -> Result<Option<Vec<CallHierarchyItem>>, GraphError> {
        if self.roots.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.roots.clone()))
        }
    }

    fn incoming_calls(
        &mut self,
        params: CallHierarchyIncomingCallsParams,
    ) -> Result<Option<Vec<CallHierarchyIncomingCall>>, GraphError> {
        self.incoming_queries += 1;
        if let Some(error) = &self.incoming_error {
            return Err(error.clone());
        }
        Ok(self.incoming.get(&params.item.name).cloned())
    }

    fn outgoing_calls(
        &mut self,
        params: CallHierarchyOutgoingCallsParams,
    ) -> Result<Option<Vec<CallHierarchyOutgoingCall>>, GraphError> {
        Ok(self.outgoing.get(&params.item.name).cloned())
    }
}

impl ReferenceClient for ScriptedProvider {
    fn references(
        &mut self,
        _location: &SourceLocation,
    ) -> Result<Option<Vec<SourceLocation>>, EngineError> {
        self.reference_queries += 1;
        if let Some(message) = &self.reference_error {
            return Err(EngineError::provider(message.clone()));
        }
        if self.references.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.references.clone()))
        }
    }
}

/// A provider scripted as the `foo` function scenario: a definition on
/// the declaration line, one caller with call sites on zero-based lines
/// 4 and 6.
pub(super) fn function_provider() -> ScriptedProvider {
    let mut provider = ScriptedProvider {
        definition: Some(at("/src/a.c", 9, 5)),
        roots: vec![item("foo", "/src/a.c", 9)],
        ..ScriptedProvider::default()
    };
    provider.outlines.insert(
        Utf8PathBuf::from("/src/a.c"),
        vec![symbol(
            "foo",
            SymbolKind::FUNCTION,
            span(9, 0, 30, 1),
            span(9, 4, 9, 7),
        )],
    );
    provider.incoming.insert(
        "foo".to_owned(),
        vec![call_from(item("caller", "/src/b.c", 4), &[4, 6])],
    );
    provider
}

/// A provider scripted as the `count` field scenario: a non-function
/// definition whose references sit inside two functions.
pub(super) fn field_provider() -> ScriptedProvider {
    let mut provider = ScriptedProvider {
        definition: Some(at("/src/a.c", 3, 4)),
        ..ScriptedProvider::default()
    };
    provider.outlines.insert(
        Utf8PathBuf::from("/src/a.c"),
        vec![
            symbol(
                "count",
                SymbolKind::FIELD,
                span(3, 0, 3, 20),
                span(3, 4, 3, 9),
            ),
            symbol(
                "alpha",
                SymbolKind::FUNCTION,
                span(5, 0, 9, 1),
                span(5, 4, 5, 9),
            ),
            symbol(
                "beta",
                SymbolKind::FUNCTION,
                span(10, 0, 19, 1),
                span(10, 4, 10, 8),
            ),
        ],
    );
    provider.references = vec![
        at("/src/a.c", 6, 2),
        at("/src/a.c", 12, 2),
        at("/src/a.c", 15, 2),
    ];
    provider
}
