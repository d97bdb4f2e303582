// ABOUTME: Functions command implementation.
// ABOUTME: Lists deployed functions of the service with their latest versions.

use super::client::connect;
use deploy_inventory::catalog::list_function_versions;
use deploy_inventory::config::Config;
use deploy_inventory::error::Result;
use deploy_inventory::output::Output;
use deploy_inventory::report::render_functions;

/// List functions deployed for the configured service and stage.
pub async fn functions(config: Config, mut output: Output) -> Result<()> {
    output.start_timer();

    let client = connect(&config)?;
    let scope = config.scope();

    let records = list_function_versions(&client, &scope, config.concurrency).await?;

    output.report(&render_functions(&records, &scope), &records)
}
