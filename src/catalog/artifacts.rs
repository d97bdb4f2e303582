// ABOUTME: Artifact catalog: groups uploaded deployment artifacts by directory.
// ABOUTME: Parses storage keys and `<timestamp>-<datetime>` deployment directories.

use super::error::CatalogError;
use crate::remote::ListingClient;
use crate::types::ServiceScope;
use chrono::{DateTime, Utc};
use nonempty::NonEmpty;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// One uploaded file inside a deployment directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactEntry {
    pub directory: String,
    pub file: String,
}

/// A deployment directory name split into its two tokens.
///
/// Grammar:
///
/// ```text
/// directory := timestamp "-" datetime
/// timestamp := DIGIT+
/// datetime  := part ("-" part){2,}
/// ```
///
/// The datetime must have at least three hyphen-separated parts so that a
/// date like `2021-10-01T00-00-00` is never mistaken for part of the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentDirectory {
    pub timestamp: String,
    pub datetime: String,
}

impl DeploymentDirectory {
    pub fn parse(directory: &str) -> Option<Self> {
        let digits = directory
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }

        let (timestamp, rest) = directory.split_at(digits);
        let datetime = rest.strip_prefix('-')?;

        let parts: Vec<&str> = datetime.split('-').collect();
        if parts.len() < 3 || parts.iter().any(|p| p.is_empty()) {
            return None;
        }

        Some(Self {
            timestamp: timestamp.to_string(),
            datetime: datetime.to_string(),
        })
    }

    /// Timestamp read as epoch milliseconds, if it fits.
    pub fn deployed_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }
}

/// Artifacts uploaded by a single deployment, in listing order.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentGroup {
    pub directory: String,
    pub timestamp: String,
    pub datetime: String,
    pub deployed_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "serialize_entries")]
    pub entries: NonEmpty<ArtifactEntry>,
}

impl DeploymentGroup {
    /// File names in insertion order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.file.as_str())
    }
}

fn serialize_entries<S: Serializer>(
    entries: &NonEmpty<ArtifactEntry>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(entries.iter())
}

/// Split a storage key into directory and file below `prefix`.
///
/// The first path segment after `<prefix>/` is the directory; everything after
/// it is the file. Returns `None` for keys outside the prefix or missing either
/// part.
pub fn split_key(prefix: &str, key: &str) -> Option<ArtifactEntry> {
    let rest = key.strip_prefix(prefix)?.strip_prefix('/')?;
    let (directory, file) = rest.split_once('/')?;
    if directory.is_empty() || file.is_empty() {
        return None;
    }

    Some(ArtifactEntry {
        directory: directory.to_string(),
        file: file.to_string(),
    })
}

/// Group keys into deployments, ordered by first appearance of each directory.
pub fn group_deployments<'a, I>(
    prefix: &str,
    keys: I,
) -> Result<Vec<DeploymentGroup>, CatalogError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut grouped: Vec<NonEmpty<ArtifactEntry>> = Vec::new();

    for key in keys {
        let Some(entry) = split_key(prefix, key) else {
            tracing::debug!(key, "skipping key outside deployment layout");
            continue;
        };

        match index.get(&entry.directory) {
            Some(&i) => grouped[i].push(entry),
            None => {
                index.insert(entry.directory.clone(), grouped.len());
                grouped.push(NonEmpty::new(entry));
            }
        }
    }

    grouped
        .into_iter()
        .map(|entries| {
            let directory = entries.first().directory.clone();
            let parsed = DeploymentDirectory::parse(&directory)
                .ok_or_else(|| CatalogError::UnparseableDirectory(directory.clone()))?;
            Ok(DeploymentGroup {
                deployed_at: parsed.deployed_at(),
                directory,
                timestamp: parsed.timestamp,
                datetime: parsed.datetime,
                entries,
            })
        })
        .collect()
}

/// List the deployments uploaded for `scope` into `bucket`.
///
/// Issues exactly one listing call. An empty result means no deployments were
/// found and is not an error.
pub async fn list_deployments<C: ListingClient + ?Sized>(
    client: &C,
    bucket: &str,
    scope: &ServiceScope,
) -> Result<Vec<DeploymentGroup>, CatalogError> {
    let prefix = scope.artifact_prefix();
    tracing::debug!(bucket, prefix = %prefix, "listing deployment artifacts");

    let objects = client.list_artifacts(bucket, &prefix).await?;
    let groups = group_deployments(&prefix, objects.iter().map(|o| o.key.as_str()))?;

    tracing::info!(
        objects = objects.len(),
        deployments = groups.len(),
        "grouped deployment artifacts"
    );
    Ok(groups)
}
