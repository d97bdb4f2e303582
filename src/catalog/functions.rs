// ABOUTME: Function version catalog: deployed functions owned by a service/stage.
// ABOUTME: Fans out one bounded, concurrent version listing per matching function.

use super::error::CatalogError;
use crate::remote::{ListingClient, VersionSummary};
use crate::types::ServiceScope;
use futures::{StreamExt, TryStreamExt, stream};
use serde::Serialize;

/// Upper bound on functions retrieved by the discovery call.
///
/// Functions past this bound are not listed.
pub const MAX_FUNCTIONS: usize = 200;

/// Versions requested and shown per function.
pub const MAX_VERSIONS: usize = 5;

/// Version listings in flight at once unless configured otherwise.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// One published revision of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    pub version: String,
    pub function_name: String,
}

impl From<VersionSummary> for VersionRecord {
    fn from(summary: VersionSummary) -> Self {
        Self {
            version: summary.version,
            function_name: summary.function_name,
        }
    }
}

/// A deployed function and its versions in API order (oldest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    pub versions: Vec<VersionRecord>,
}

impl FunctionRecord {
    /// Version labels, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().rev().map(|v| v.version.as_str())
    }
}

/// Whether a function name belongs to `scope`.
///
/// This is a substring match on `<service>-<stage>`, not a prefix match, so a
/// function from another service whose name contains the same text also
/// matches.
pub fn matches_scope(name: &str, scope: &ServiceScope) -> bool {
    name.contains(&scope.function_marker())
}

/// List the functions deployed for `scope` with up to [`MAX_VERSIONS`] versions each.
///
/// Version listings run concurrently, at most `concurrency` at a time. The first
/// failed call aborts the whole listing; no partial result is returned.
pub async fn list_function_versions<C: ListingClient + ?Sized>(
    client: &C,
    scope: &ServiceScope,
    concurrency: usize,
) -> Result<Vec<FunctionRecord>, CatalogError> {
    let functions = client.list_functions(MAX_FUNCTIONS).await?;
    let discovered = functions.len();

    let owned: Vec<String> = functions
        .into_iter()
        .map(|f| f.name)
        .filter(|name| matches_scope(name, scope))
        .collect();

    tracing::info!(
        discovered,
        owned = owned.len(),
        concurrency,
        "listing function versions"
    );

    let mut fetched: Vec<(usize, Vec<VersionRecord>)> =
        stream::iter(owned.iter().enumerate())
            .map(|(slot, name)| async move {
                tracing::debug!(function = %name, "listing versions");
                let versions: Vec<VersionRecord> = client
                    .list_function_versions(name, MAX_VERSIONS)
                    .await?
                    .into_iter()
                    .map(VersionRecord::from)
                    .collect();
                Ok::<_, CatalogError>((slot, versions))
            })
            .buffer_unordered(concurrency.max(1))
            .try_collect()
            .await?;

    // Completion order is arbitrary; each discovered slot is filled exactly once.
    fetched.sort_unstable_by_key(|(slot, _)| *slot);

    Ok(owned
        .into_iter()
        .zip(fetched)
        .map(|(name, (_, versions))| FunctionRecord { name, versions })
        .collect())
}
