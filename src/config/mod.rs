// ABOUTME: Configuration types and parsing for inventory.yml.
// ABOUTME: Handles file discovery, validation, and per-stage overrides.

use crate::catalog::DEFAULT_CONCURRENCY;
use crate::error::{Error, Result};
use crate::types::{ServiceName, ServiceScope, Stage};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "inventory.yml";
pub const CONFIG_FILENAME_ALT: &str = "inventory.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".inventory/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceName,

    #[serde(default)]
    pub stage: Stage,

    #[serde(default = "default_region")]
    pub region: String,

    /// Resolved name of the bucket deployments are uploaded to.
    #[serde(default)]
    pub deployment_bucket: Option<String>,

    /// Inventory snapshot, relative to the config file's directory.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default)]
    pub stages: HashMap<String, StageOverride>,

    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StageOverride {
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub deployment_bucket: Option<String>,

    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "using configuration file");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(Error::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Switch to `stage`, applying its overrides when the config defines any.
    pub fn for_stage(&self, stage: Stage) -> Config {
        let mut merged = self.clone();

        if let Some(over) = self.stages.get(stage.as_str()) {
            if let Some(ref region) = over.region {
                merged.region = region.clone();
            }
            if over.deployment_bucket.is_some() {
                merged.deployment_bucket = over.deployment_bucket.clone();
            }
            if over.snapshot.is_some() {
                merged.snapshot = over.snapshot.clone();
            }
        }

        merged.stage = stage;
        merged
    }

    pub fn scope(&self) -> ServiceScope {
        ServiceScope::new(self.service.clone(), self.stage.clone())
    }

    pub fn bucket(&self) -> Result<&str> {
        self.deployment_bucket
            .as_deref()
            .ok_or_else(|| Error::MissingBucket(self.stage.to_string()))
    }

    /// Snapshot path resolved against the config file's directory.
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        self.snapshot
            .as_ref()
            .map(|p| self.base_dir.join(p))
            .ok_or_else(|| Error::MissingSnapshot(self.stage.to_string()))
    }
}
