//! Request identity shared by the serializer and the view ledger.

use camino::{Utf8Path, Utf8PathBuf};

/// Identity of one relation request.
///
/// Two requests are the same request when they name the same symbol at
/// the same display location. The key is what the single-flight guard
/// holds while a request runs and what the view ledger remembers per
/// result view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    symbol: String,
    path: Utf8PathBuf,
    line: u32,
}

impl RequestKey {
    /// Creates a key for a symbol at a 1-based display line.
    #[must_use]
    pub fn new(symbol: impl Into<String>, path: impl Into<Utf8PathBuf>, line: u32) -> Self {
        Self {
            symbol: symbol.into(),
            path: path.into(),
            line,
        }
    }

    /// The requested symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// File the request was made in.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// 1-based display line of the request position.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl std::fmt::Display for RequestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}:{}", self.symbol, self.path, self.line)
    }
}
