// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use deploy_inventory::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deploy-inventory")]
#[command(about = "List uploaded deployments and deployed function versions of a service")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the report as a JSON event
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the configuration file (default: discovered in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Normal
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List deployments uploaded to the deployment bucket
    Deployments {
        #[command(flatten)]
        target: TargetArgs,

        /// Deployment bucket name (overrides config)
        #[arg(long)]
        bucket: Option<String>,
    },

    /// List deployed functions and their last 5 versions
    Functions {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
pub struct TargetArgs {
    /// Stage to inspect (overrides config)
    #[arg(short, long)]
    pub stage: Option<String>,

    /// Region to inspect (overrides config)
    #[arg(short, long)]
    pub region: Option<String>,
}
