// ABOUTME: Listing client construction shared by commands.
// ABOUTME: Opens the inventory snapshot configured for the selected stage.

use deploy_inventory::config::Config;
use deploy_inventory::error::Result;
use deploy_inventory::remote::SnapshotClient;

/// Open the listing client for the configured stage.
pub fn connect(config: &Config) -> Result<SnapshotClient> {
    let path = config.snapshot_path()?;
    tracing::debug!(
        stage = %config.stage,
        region = %config.region,
        snapshot = %path.display(),
        "opening listing client"
    );
    SnapshotClient::load(&path)
}
