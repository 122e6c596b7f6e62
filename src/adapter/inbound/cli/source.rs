//! Deal source selection from flags and config.

use std::time::Duration;

use tracing::{debug, info};

use crate::adapter::outbound::file::JsonFileSource;
use crate::adapter::outbound::terminal::{TerminalBridge, TerminalCredentials};
use crate::domain::deal::Deal;
use crate::domain::window::HistoryWindow;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::deals::DealSource;

use super::command::SourceArgs;

/// Build the deal source named by the flags, falling back to config.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] when neither a deal file nor complete
/// terminal credentials are available, and [`Error::InvalidInput`] for a
/// non-numeric login.
pub fn build_source(args: &SourceArgs, config: &Config) -> Result<Box<dyn DealSource>> {
    if let Some(path) = &args.deals {
        return Ok(Box::new(JsonFileSource::new(path)));
    }

    let terminal = &config.terminal;
    let server = args.server.as_ref().or(terminal.server.as_ref());
    let login = args.login.as_ref().or(terminal.login.as_ref());
    let password = args.password.as_ref().or(terminal.password.as_ref());

    let (Some(server), Some(login), Some(password)) = (server, login, password) else {
        return Err(Error::MissingInput);
    };

    let credentials = TerminalCredentials::parse(server.as_str(), login, password.as_str())?;
    let bridge = TerminalBridge::new(
        terminal.url.as_str(),
        credentials,
        Duration::from_secs(terminal.timeout_secs),
    )?;
    Ok(Box::new(bridge))
}

/// History window from `--days`, else the configured lookback.
#[must_use]
pub fn history_window(args: &SourceArgs, config: &Config) -> HistoryWindow {
    HistoryWindow::last_days(args.days.unwrap_or(config.history.days))
}

/// Resolve the source and fetch the deal history.
pub async fn fetch_deals(args: &SourceArgs, config: &Config) -> Result<Vec<Deal>> {
    let source = build_source(args, config)?;
    let window = history_window(args, config);

    debug!(source = source.name(), from = %window.from, to = %window.to, "Fetching deals");
    let deals = source.fetch(&window).await?;
    info!(source = source.name(), deals = deals.len(), "Deals loaded");
    Ok(deals)
}
