//! Command-line interface definitions.
//!
//! Every command writes exactly one JSON line to stdout: the result, or an
//! `{"error": ...}` record. Logs go to stderr.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Trading account statistics from deal history
#[derive(Parser, Debug)]
#[command(name = "ledgerlens")]
#[command(version)]
pub struct Cli {
    /// Config file [default: ./ledgerlens.toml if present]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print account statistics
    Summary(SummaryArgs),

    /// Print account statistics and insert every trade into the journal
    Sync(SyncArgs),
}

/// Where deals come from.
///
/// Either `--deals` or the terminal account (`--server`, `--login` and a
/// password) must be given; config values fill in what flags leave out.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Deal export as a JSON array ("-" reads stdin)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["server", "login", "password"])]
    pub deals: Option<PathBuf>,

    /// Trade server name
    #[arg(long)]
    pub server: Option<String>,

    /// Account login number
    #[arg(long)]
    pub login: Option<String>,

    /// Account password (prefer LEDGERLENS_TERMINAL_PASSWORD)
    #[arg(long)]
    pub password: Option<String>,

    /// Days of history to aggregate [default: 365]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,
}

/// Arguments for `ledgerlens summary`.
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Human-readable report instead of JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for `ledgerlens sync`.
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Journal owner written to every row
    #[arg(long)]
    pub user_id: Option<String>,

    /// Journal table [default: from config, "trades"]
    #[arg(long)]
    pub table: Option<String>,

    /// Human-readable report instead of JSON
    #[arg(long)]
    pub pretty: bool,
}
