// ABOUTME: ListingClient backed by a local inventory snapshot file.
// ABOUTME: Serves bucket listings and function versions captured ahead of time.

use super::client::{FunctionSummary, ListingClient, ObjectSummary, VersionSummary};
use super::error::RemoteError;
use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Captured state of an artifact store and a function registry.
///
/// ```yaml
/// buckets:
///   my-deployment-bucket:
///     - serverless/svc/dev/1633072800-2021-10-01T00-00-00/svc.zip
/// functions:
///   - name: svc-dev-hello
///     versions: ["$LATEST", "1", "2"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub buckets: HashMap<String, Vec<String>>,

    #[serde(default)]
    pub functions: Vec<FunctionSnapshot>,
}

/// A deployed function and its versions, oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionSnapshot {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<String>,
}

impl Snapshot {
    /// Parse a snapshot from YAML. JSON snapshots parse too.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

/// Listing client answering from a [`Snapshot`].
pub struct SnapshotClient {
    snapshot: Snapshot,
}

impl SnapshotClient {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading inventory snapshot");
        Snapshot::load(path).map(Self::new)
    }
}

#[async_trait]
impl ListingClient for SnapshotClient {
    async fn list_artifacts(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> std::result::Result<Vec<ObjectSummary>, RemoteError> {
        let keys = self
            .snapshot
            .buckets
            .get(bucket)
            .ok_or_else(|| RemoteError::NotFound(format!("bucket {bucket}")))?;

        Ok(keys
            .iter()
            .filter(|key| key.starts_with(prefix))
            .map(|key| ObjectSummary { key: key.clone() })
            .collect())
    }

    async fn list_functions(
        &self,
        max_items: usize,
    ) -> std::result::Result<Vec<FunctionSummary>, RemoteError> {
        Ok(self
            .snapshot
            .functions
            .iter()
            .take(max_items)
            .map(|f| FunctionSummary {
                name: f.name.clone(),
            })
            .collect())
    }

    async fn list_function_versions(
        &self,
        name: &str,
        max_items: usize,
    ) -> std::result::Result<Vec<VersionSummary>, RemoteError> {
        let function = self
            .snapshot
            .functions
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| RemoteError::NotFound(format!("function {name}")))?;

        Ok(function
            .versions
            .iter()
            .take(max_items)
            .map(|version| VersionSummary {
                version: version.clone(),
                function_name: function.name.clone(),
            })
            .collect())
    }
}
