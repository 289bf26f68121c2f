//! JSON report of relation trees.
//!
//! The report shape follows the traversal direction: incoming trees nest
//! `caller` entries under `calledBy`, outgoing trees nest `callee`
//! entries under `callsTo`. Names carry no parenthesised argument lists;
//! providers that append signatures get them stripped here.

use serde_json::{Map, Value};

use tracery_graph::{Direction, RelationNode};

use crate::outcome::HierarchyOutcome;

/// Serialises a relation tree for machine consumption.
#[must_use]
pub fn hierarchy_report(outcome: &HierarchyOutcome) -> Value {
    let (name_key, children_key) = keys_for(outcome.direction());
    let mut map = Map::new();
    map.insert(
        name_key.to_owned(),
        Value::from(strip_arguments(outcome.symbol())),
    );
    map.insert(
        "direction".to_owned(),
        Value::from(outcome.direction().to_string()),
    );
    let children: Vec<Value> = outcome
        .nodes()
        .iter()
        .map(|node| node_value(node, name_key, children_key))
        .collect();
    map.insert(children_key.to_owned(), Value::Array(children));
    Value::Object(map)
}

fn node_value(node: &RelationNode, name_key: &str, children_key: &str) -> Value {
    let mut map = Map::new();
    map.insert(
        name_key.to_owned(),
        Value::from(strip_arguments(node.name())),
    );
    map.insert("file".to_owned(), Value::from(node.path().as_str()));
    map.insert("line".to_owned(), Value::from(node.line()));
    if !node.call_sites().is_empty() {
        map.insert(
            "callSites".to_owned(),
            Value::from(node.call_sites().to_vec()),
        );
    }
    let children: Vec<Value> = node
        .children()
        .iter()
        .map(|child| node_value(child, name_key, children_key))
        .collect();
    if !children.is_empty() {
        map.insert(children_key.to_owned(), Value::Array(children));
    }
    Value::Object(map)
}

const fn keys_for(direction: Direction) -> (&'static str, &'static str) {
    match direction {
        Direction::Incoming => ("caller", "calledBy"),
        Direction::Outgoing => ("callee", "callsTo"),
    }
}

fn strip_arguments(name: &str) -> &str {
    name.split('(').next().unwrap_or(name).trim_end()
}
