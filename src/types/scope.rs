// ABOUTME: Service/stage scope shared by both inventory pipelines.
// ABOUTME: Derives the artifact key prefix and the function name marker.

use super::{ServiceName, Stage};

/// Root directory the deploy tool uploads artifacts under.
pub const ARTIFACT_ROOT: &str = "serverless";

/// A service deployed to one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceScope {
    pub service: ServiceName,
    pub stage: Stage,
}

impl ServiceScope {
    pub fn new(service: ServiceName, stage: Stage) -> Self {
        Self { service, stage }
    }

    /// Listing prefix for this scope's artifacts, without a trailing slash.
    pub fn artifact_prefix(&self) -> String {
        format!("{}/{}/{}", ARTIFACT_ROOT, self.service, self.stage)
    }

    /// Substring every owned function name carries: `<service>-<stage>`.
    pub fn function_marker(&self) -> String {
        format!("{}-{}", self.service, self.stage)
    }
}
