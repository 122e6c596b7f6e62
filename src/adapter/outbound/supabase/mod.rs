//! Supabase trade journal.
//!
//! Inserts rows through the PostgREST endpoint `{url}/rest/v1/{table}`, one
//! request per row.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::domain::journal::NormalizedTrade;
use crate::error::{Error, Result};
use crate::port::outbound::journal::TradeJournal;

/// Table used when none is configured.
pub const DEFAULT_TABLE: &str = "trades";

/// Row body: the journal columns plus the owning user.
#[derive(Serialize)]
struct JournalRow<'a> {
    user_id: &'a str,
    #[serde(flatten)]
    trade: &'a NormalizedTrade,
}

/// Supabase REST client for the trade journal table.
#[derive(Debug)]
pub struct SupabaseJournal {
    client: Client,
    url: String,
    api_key: String,
    table: String,
    user_id: String,
}

impl SupabaseJournal {
    /// Create a journal client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
        user_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
            table: table.into(),
            user_id: user_id.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

#[async_trait]
impl TradeJournal for SupabaseJournal {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn insert(&self, trade: &NormalizedTrade) -> Result<()> {
        let row = JournalRow {
            user_id: &self.user_id,
            trade,
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Journal(format!("{status}: {body}")));
        }

        debug!(table = %self.table, ticker = %trade.ticker, "Row inserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deal::{Deal, DealType};
    use rust_decimal_macros::dec;

    #[test]
    fn endpoint_joins_table() {
        let journal = SupabaseJournal::new(
            "https://abc.supabase.co/",
            "key",
            "trades",
            "user-1",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(journal.endpoint(), "https://abc.supabase.co/rest/v1/trades");
    }

    #[test]
    fn row_has_every_journal_column() {
        let deal = Deal::opening(DealType::Buy, dec!(1), dec!(3)).with_symbol("EURUSD");
        let trade = NormalizedTrade::from_deal(&deal).unwrap();
        let json = serde_json::to_value(JournalRow {
            user_id: "user-1",
            trade: &trade,
        })
        .unwrap();

        let mut columns: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        columns.sort_unstable();
        assert_eq!(
            columns,
            vec![
                "date",
                "direction",
                "entry",
                "exit",
                "instrument_type",
                "market_condition",
                "notes",
                "pnl",
                "screenshot_url",
                "size",
                "strategy",
                "tags",
                "ticker",
                "user_id",
                "win_loss",
            ]
        );
        assert_eq!(json["user_id"], "user-1");
    }
}
