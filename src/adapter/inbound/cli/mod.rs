//! CLI module graph.

pub mod command;
pub mod output;
pub mod report;
pub mod source;
pub mod summary;
pub mod sync;

use std::process::ExitCode;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

use command::Commands;

/// Dispatch a parsed subcommand.
pub async fn run(command: Commands, config: &Config) -> Result<ExitCode> {
    match command {
        Commands::Summary(args) => summary::execute(&args, config).await,
        Commands::Sync(args) => sync::execute(&args, config).await,
    }
}
