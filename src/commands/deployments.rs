// ABOUTME: Deployments command implementation.
// ABOUTME: Lists uploaded deployment artifacts grouped by deployment.

use super::client::connect;
use deploy_inventory::catalog::list_deployments;
use deploy_inventory::config::Config;
use deploy_inventory::error::Result;
use deploy_inventory::output::Output;
use deploy_inventory::report::render_deployments;

/// List deployments uploaded for the configured service and stage.
pub async fn deployments(config: Config, mut output: Output) -> Result<()> {
    output.start_timer();

    let bucket = config.bucket()?;
    let client = connect(&config)?;
    let scope = config.scope();

    let groups = list_deployments(&client, bucket, &scope).await?;

    output.report(&render_deployments(&groups), &groups)
}
