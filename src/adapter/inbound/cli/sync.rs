//! Handler for `ledgerlens sync`.

use std::process::ExitCode;
use std::time::Duration;

use tracing::info;

use crate::adapter::outbound::supabase::SupabaseJournal;
use crate::application::sync::{persist_trades, SyncReport};
use crate::domain::stats::aggregate;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

use super::command::SyncArgs;
use super::summary::NO_DEALS;
use super::{output, report, source};

/// Execute `sync`.
pub async fn execute(args: &SyncArgs, config: &Config) -> Result<ExitCode> {
    let deal_source = source::build_source(&args.source, config)?;
    let user_id = args
        .user_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(ConfigError::MissingField { field: "user_id" })?;
    let (url, api_key) = config.journal.credentials()?;
    let table = args
        .table
        .as_deref()
        .unwrap_or(config.journal.table.as_str());
    let journal = SupabaseJournal::new(
        url,
        api_key,
        table,
        user_id,
        Duration::from_secs(config.journal.timeout_secs),
    )?;

    let window = source::history_window(&args.source, config);
    let deals = deal_source.fetch(&window).await?;
    info!(source = deal_source.name(), deals = deals.len(), "Deals loaded");
    if deals.is_empty() {
        info!("No deals in range");
        output::error_record(NO_DEALS);
        return Ok(ExitCode::SUCCESS);
    }

    let agg = aggregate(&deals);
    info!(trades = agg.trades.len(), table, "Syncing trades to journal");
    let inserted = persist_trades(&journal, &agg.trades).await;
    let sync_report = SyncReport::new(agg.summary, inserted, agg.trades.len());

    if args.pretty {
        report::print_sync(&sync_report);
    } else {
        output::emit(&sync_report)?;
    }
    Ok(ExitCode::SUCCESS)
}
