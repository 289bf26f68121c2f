//! Suffix-based path exclusion.

use camino::Utf8Path;

/// Pure predicate excluding paths by configured file-name suffix.
///
/// The filter is parsed from a comma-separated list such as
/// `".i, .d, generated.c"`. Matching is against the file name only, so a
/// suffix never matches directory components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilter {
    suffixes: Vec<String>,
}

impl ExclusionFilter {
    /// Parses a comma-separated suffix list.
    ///
    /// Blank entries are dropped; an empty or all-blank input yields a
    /// filter that excludes nothing.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let suffixes = raw
            .split(',')
            .map(str::trim)
            .filter(|suffix| !suffix.is_empty())
            .map(str::to_owned)
            .collect();
        Self { suffixes }
    }

    /// Returns whether the filter has no suffixes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Returns whether `path` should be excluded.
    #[must_use]
    pub fn excludes(&self, path: &Utf8Path) -> bool {
        if self.suffixes.is_empty() {
            return false;
        }
        // File name, tolerating paths that arrived with either separator.
        let file_name = path
            .as_str()
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix))
    }
}
