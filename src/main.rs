// ABOUTME: Entry point for the deploy-inventory CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, TargetArgs};
use deploy_inventory::config::Config;
use deploy_inventory::error::{Error, Result};
use deploy_inventory::output::Output;
use deploy_inventory::types::Stage;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = cli.output_mode();
    let result = run(cli, Output::new(mode)).await;

    if let Err(e) = result {
        Output::new(mode).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: Output) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::discover(&env::current_dir()?)?,
    };

    match cli.command {
        Commands::Deployments { target, bucket } => {
            let mut config = apply_target(config, target)?;
            if bucket.is_some() {
                config.deployment_bucket = bucket;
            }
            commands::deployments(config, output).await
        }
        Commands::Functions { target } => {
            let config = apply_target(config, target)?;
            commands::functions(config, output).await
        }
    }
}

/// Apply stage and region flags on top of the loaded configuration.
fn apply_target(config: Config, target: TargetArgs) -> Result<Config> {
    let stage = match target.stage {
        Some(s) => Stage::new(&s).map_err(|e| Error::InvalidConfig(e.to_string()))?,
        None => config.stage.clone(),
    };

    let mut config = config.for_stage(stage);
    if let Some(region) = target.region {
        config.region = region;
    }
    Ok(config)
}
