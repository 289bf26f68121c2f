//! Conversion between provider URIs and the paths shown in relation
//! nodes.
//!
//! Providers report locations as URIs while everything downstream of
//! the builder works in display paths. `file` URIs are percent-decoded
//! through the `url` crate; URIs in any other scheme (remote
//! workspaces and the like) keep their raw form, since rewriting them
//! is the host editor's concern.

use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::Uri;
use url::Url;

use crate::error::GraphError;

/// Turns a provider-reported URI into a display path.
///
/// `file` URIs become plain filesystem paths with percent-decoding
/// applied. Any other scheme passes through unchanged.
#[must_use]
pub fn uri_to_path(uri: &Uri) -> Utf8PathBuf {
    let raw = uri.as_str();
    if let Some(path) = decode_file_uri(raw) {
        return path;
    }
    // Leniency for malformed file URIs; non-file schemes keep their
    // raw form.
    raw.strip_prefix("file://")
        .map_or_else(|| Utf8PathBuf::from(raw), Utf8PathBuf::from)
}

fn decode_file_uri(raw: &str) -> Option<Utf8PathBuf> {
    let url = Url::parse(raw).ok()?;
    let path = url.to_file_path().ok()?;
    Utf8PathBuf::try_from(path).ok()
}

/// Turns a display path back into the `file` URI a provider expects.
///
/// # Errors
///
/// Returns a `GraphError` when the path has no `file` URI form, for
/// example a relative path.
pub fn path_to_uri(path: &Utf8Path) -> Result<Uri, GraphError> {
    let url = Url::from_file_path(path.as_std_path()).map_err(|()| {
        GraphError::io(
            format!("path {path} has no file URI form"),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not an absolute path"),
        )
    })?;

    url.as_str().parse().map_err(|_| {
        GraphError::io(
            format!("URI {url} was rejected by the protocol types"),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "malformed URI"),
        )
    })
}
