// ABOUTME: Error types for inventory pipelines.
// ABOUTME: Remote call failures and unparseable deployment directories.

use crate::remote::RemoteError;

/// Errors that abort building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A listing call failed.
    #[error("remote call failed: {0}")]
    Remote(#[from] RemoteError),

    /// A grouped deployment directory does not read as `<timestamp>-<datetime>`.
    #[error("unparseable deployment directory: {0}")]
    UnparseableDirectory(String),
}
