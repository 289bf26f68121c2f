//! Reference group representation.

use camino::{Utf8Path, Utf8PathBuf};

/// Kind of a reference group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// References enclosed by a function-like symbol.
    Function,
    /// References grouped by the file they occur in.
    File,
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Function => "function",
            Self::File => "file",
        };
        f.write_str(label)
    }
}

/// A group of references sharing an enclosing function or a file.
///
/// Built once per aggregation call and discarded after the caller hands
/// it to the presentation layer. `lines` and `paths` run in parallel and
/// keep duplicates: each pair is one concrete reference site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceGroup {
    kind: GroupKind,
    display_name: String,
    primary_path: Utf8PathBuf,
    lines: Vec<u32>,
    paths: Vec<Utf8PathBuf>,
}

impl ReferenceGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new(
        kind: GroupKind,
        display_name: impl Into<String>,
        primary_path: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            kind,
            display_name: display_name.into(),
            primary_path: primary_path.into(),
            lines: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Appends one reference site to the group.
    pub fn push(&mut self, line: u32, path: impl Into<Utf8PathBuf>) {
        self.lines.push(line);
        self.paths.push(path.into());
    }

    /// Kind of the group.
    #[must_use]
    pub const fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Name shown for the group: a declared function name or a file name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Path of the enclosing function's file, or of the grouped file.
    #[must_use]
    pub fn primary_path(&self) -> &Utf8Path {
        &self.primary_path
    }

    /// 1-based display lines, one per reference site.
    #[must_use]
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// Paths parallel to [`ReferenceGroup::lines`].
    #[must_use]
    pub fn paths(&self) -> &[Utf8PathBuf] {
        &self.paths
    }

    /// Number of reference sites in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether the group holds no reference sites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the presentation layer may expand the group further via a
    /// call-hierarchy traversal. Only function groups are expandable.
    #[must_use]
    pub fn expandable(&self) -> bool {
        self.kind == GroupKind::Function
    }
}

/// Result of aggregating the references of one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    symbol: String,
    groups: Vec<ReferenceGroup>,
}

impl ReferenceTable {
    /// Creates a table for the given symbol.
    #[must_use]
    pub fn new(symbol: impl Into<String>, groups: Vec<ReferenceGroup>) -> Self {
        Self {
            symbol: symbol.into(),
            groups,
        }
    }

    /// The symbol whose references were aggregated.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Groups in first-occurrence order.
    #[must_use]
    pub fn groups(&self) -> &[ReferenceGroup] {
        &self.groups
    }

    /// Total number of reference sites across all groups.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.groups.iter().map(ReferenceGroup::len).sum()
    }
}
