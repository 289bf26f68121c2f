//! Plain-text rendering of relation results for output channels.

use tracery_graph::RelationNode;
use tracery_refs::ReferenceTable;

use crate::outcome::HierarchyOutcome;

/// Renders a relation tree as indented plain text.
///
/// One line per node, two spaces of indent per level, call sites listed
/// as 1-based display lines:
///
/// ```text
/// foo (incoming)
/// - caller (/src/b.c:5) [at L5, L7]
///   - outer (/src/c.c:21) [at L23]
/// ```
#[must_use]
pub fn render_hierarchy(outcome: &HierarchyOutcome) -> String {
    let mut out = format!("{} ({})\n", outcome.symbol(), outcome.direction());
    render_nodes(&mut out, outcome.nodes(), 0);
    out
}

fn render_nodes(out: &mut String, nodes: &[RelationNode], depth: usize) {
    for node in nodes {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!(
            "- {} ({}:{})",
            node.name(),
            node.path(),
            node.line()
        ));
        push_sites(out, node.call_sites());
        out.push('\n');
        render_nodes(out, node.children(), depth + 1);
    }
}

/// Renders a reference table as one line per group.
#[must_use]
pub fn render_references(table: &ReferenceTable) -> String {
    let mut out = format!("{} (references)\n", table.symbol());
    for group in table.groups() {
        out.push_str(&format!("- {} ({})", group.display_name(), group.primary_path()));
        push_sites(&mut out, group.lines());
        out.push('\n');
    }
    out
}

fn push_sites(out: &mut String, lines: &[u32]) {
    if lines.is_empty() {
        return;
    }
    let sites: Vec<String> = lines.iter().map(|line| format!("L{line}")).collect();
    out.push_str(&format!(" [at {}]", sites.join(", ")));
}
