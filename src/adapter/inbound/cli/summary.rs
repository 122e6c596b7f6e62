//! Handler for `ledgerlens summary`.

use std::process::ExitCode;

use tracing::info;

use crate::domain::stats::summarize;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

use super::command::SummaryArgs;
use super::{output, report, source};

/// Message for an empty history. Not a failure.
pub const NO_DEALS: &str = "No deals found";

/// Execute `summary`.
pub async fn execute(args: &SummaryArgs, config: &Config) -> Result<ExitCode> {
    let deals = source::fetch_deals(&args.source, config).await?;
    if deals.is_empty() {
        info!("No deals in range");
        output::error_record(NO_DEALS);
        return Ok(ExitCode::SUCCESS);
    }

    let summary = summarize(&deals);
    info!(
        trades = summary.total_trades,
        net_profit = %summary.net_profit,
        "Summary computed"
    );

    if args.pretty {
        report::print_summary(&summary);
    } else {
        output::emit(&summary)?;
    }
    Ok(ExitCode::SUCCESS)
}
