use std::process::ExitCode;

use clap::Parser;
use ledgerlens::adapter::inbound::cli::{self, command::Cli, output};
use ledgerlens::infrastructure::config::settings::{Config, DEFAULT_CONFIG_PATH};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(DEFAULT_CONFIG_PATH),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            output::error_record(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    config.init_logging(cli.verbose);

    match cli::run(cli.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Command failed");
            output::error_record(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
