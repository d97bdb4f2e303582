// ABOUTME: Listing operations against the artifact store and function registry.
// ABOUTME: Every call returns a single page; callers never request more.

use super::error::RemoteError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Read-only listing operations the inventory pipelines depend on.
#[async_trait]
pub trait ListingClient: Send + Sync {
    /// List object keys in `bucket` that start with `prefix`.
    async fn list_artifacts(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<Vec<ObjectSummary>, RemoteError>;

    /// List deployed functions, at most `max_items` of them.
    async fn list_functions(&self, max_items: usize) -> Result<Vec<FunctionSummary>, RemoteError>;

    /// List published versions of `name`, oldest first, at most `max_items`.
    async fn list_function_versions(
        &self,
        name: &str,
        max_items: usize,
    ) -> Result<Vec<VersionSummary>, RemoteError>;
}

/// One object in the artifact store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub key: String,
}

/// One deployed function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSummary {
    pub name: String,
}

/// One published revision of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSummary {
    pub version: String,
    pub function_name: String,
}
