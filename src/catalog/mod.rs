// ABOUTME: Inventory pipelines for deployment artifacts and function versions.
// ABOUTME: Each builder is read-only and independent of the other.

mod artifacts;
mod error;
mod functions;

pub use artifacts::{
    ArtifactEntry, DeploymentDirectory, DeploymentGroup, group_deployments, list_deployments,
    split_key,
};
pub use error::CatalogError;
pub use functions::{
    DEFAULT_CONCURRENCY, FunctionRecord, MAX_FUNCTIONS, MAX_VERSIONS, VersionRecord,
    list_function_versions, matches_scope,
};
