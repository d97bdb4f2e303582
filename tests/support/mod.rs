// ABOUTME: Test support utilities.
// ABOUTME: Provides an in-memory listing client and tracing setup.

use async_trait::async_trait;
use deploy_inventory::remote::{
    FunctionSummary, ListingClient, ObjectSummary, RemoteError, VersionSummary,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter =
            EnvFilter::from_default_env().add_directive("deploy_inventory=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// In-memory listing client with failure and latency injection.
#[derive(Default)]
pub struct FakeClient {
    keys: Vec<String>,
    functions: Vec<(String, Vec<String>)>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    fail_artifacts: bool,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

#[allow(dead_code)]
impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_function(mut self, name: &str, versions: &[&str]) -> Self {
        self.functions.push((
            name.to_string(),
            versions.iter().map(|v| v.to_string()).collect(),
        ));
        self
    }

    /// Make version listing for `name` fail.
    pub fn failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Delay version listing for `name`.
    pub fn delayed(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn failing_artifacts(mut self) -> Self {
        self.fail_artifacts = true;
        self
    }

    /// Calls received, in the order they started.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Highest number of version listings observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ListingClient for FakeClient {
    async fn list_artifacts(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<Vec<ObjectSummary>, RemoteError> {
        self.record(format!("list_artifacts {bucket} {prefix}"));
        if self.fail_artifacts {
            return Err(RemoteError::AccessDenied(bucket.to_string()));
        }
        Ok(self
            .keys
            .iter()
            .filter(|k| k.starts_with(prefix))
            .map(|k| ObjectSummary { key: k.clone() })
            .collect())
    }

    async fn list_functions(&self, max_items: usize) -> Result<Vec<FunctionSummary>, RemoteError> {
        self.record(format!("list_functions {max_items}"));
        Ok(self
            .functions
            .iter()
            .take(max_items)
            .map(|(name, _)| FunctionSummary { name: name.clone() })
            .collect())
    }

    async fn list_function_versions(
        &self,
        name: &str,
        max_items: usize,
    ) -> Result<Vec<VersionSummary>, RemoteError> {
        self.record(format!("list_function_versions {name} {max_items}"));
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(name) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.failing.contains(name) {
            return Err(RemoteError::Throttled(name.to_string()));
        }
        let (_, versions) = self
            .functions
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| RemoteError::NotFound(name.to_string()))?;
        Ok(versions
            .iter()
            .take(max_items)
            .map(|v| VersionSummary {
                version: v.clone(),
                function_name: name.to_string(),
            })
            .collect())
    }
}
