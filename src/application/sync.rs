//! Trade journal synchronization.
//!
//! Rows are submitted one at a time, in deal order. A failed insert is
//! logged and skipped; it never aborts the remaining rows.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::journal::NormalizedTrade;
use crate::domain::stats::SummaryResult;
use crate::port::outbound::journal::TradeJournal;

/// Summary of a sync run: the statistics plus the insert outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    #[serde(flatten)]
    pub summary: SummaryResult,
    pub inserted_trades: usize,
    pub message: String,
    #[serde(skip)]
    pub attempted_trades: usize,
}

impl SyncReport {
    #[must_use]
    pub fn new(summary: SummaryResult, inserted: usize, attempted: usize) -> Self {
        Self {
            summary,
            inserted_trades: inserted,
            message: format!("Inserted {inserted} of {attempted} trades"),
            attempted_trades: attempted,
        }
    }
}

/// Insert every row and return how many succeeded.
pub async fn persist_trades(journal: &dyn TradeJournal, trades: &[NormalizedTrade]) -> usize {
    let mut inserted = 0;

    for (index, trade) in trades.iter().enumerate() {
        match journal.insert(trade).await {
            Ok(()) => {
                inserted += 1;
                debug!(index, ticker = %trade.ticker, "Trade inserted");
            }
            Err(e) => {
                warn!(
                    journal = journal.name(),
                    index,
                    ticker = %trade.ticker,
                    error = %e,
                    "Trade insert failed"
                );
            }
        }
    }

    info!(
        journal = journal.name(),
        inserted,
        attempted = trades.len(),
        "Journal sync finished"
    );
    inserted
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::deal::{Deal, DealType};
    use crate::domain::stats::aggregate;
    use crate::error::{Error, Result};

    /// Journal that rejects inserts at the given call indices.
    struct FlakyJournal {
        fail_at: HashSet<usize>,
        calls: Mutex<usize>,
        stored: Mutex<Vec<NormalizedTrade>>,
    }

    impl FlakyJournal {
        fn new(fail_at: impl IntoIterator<Item = usize>) -> Self {
            Self {
                fail_at: fail_at.into_iter().collect(),
                calls: Mutex::new(0),
                stored: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TradeJournal for FlakyJournal {
        fn name(&self) -> &'static str {
            "flaky"
        }

        async fn insert(&self, trade: &NormalizedTrade) -> Result<()> {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                let call = *calls;
                *calls += 1;
                call
            };
            if self.fail_at.contains(&call) {
                return Err(Error::Journal(format!("rejected row {call}")));
            }
            self.stored.lock().unwrap().push(trade.clone());
            Ok(())
        }
    }

    fn five_trades() -> Vec<Deal> {
        (1..=5)
            .map(|i| {
                Deal::opening(DealType::Buy, dec!(1), dec!(10) * rust_decimal::Decimal::from(i))
                    .with_symbol(format!("SYM{i}"))
            })
            .collect()
    }

    #[tokio::test]
    async fn failed_inserts_do_not_abort_the_batch() {
        let agg = aggregate(&five_trades());
        let journal = FlakyJournal::new([1, 3]);

        let inserted = persist_trades(&journal, &agg.trades).await;

        assert_eq!(inserted, 3);
        let stored = journal.stored.lock().unwrap();
        let tickers: Vec<&str> = stored.iter().map(|t| t.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["SYM1", "SYM3", "SYM5"]);
    }

    #[tokio::test]
    async fn report_keeps_full_summary() {
        let agg = aggregate(&five_trades());
        let journal = FlakyJournal::new([0, 4]);
        let inserted = persist_trades(&journal, &agg.trades).await;

        let report = SyncReport::new(agg.summary.clone(), inserted, agg.trades.len());

        assert_eq!(report.inserted_trades, 3);
        assert_eq!(report.summary.total_trades, 5);
        assert_eq!(report.summary.net_profit, dec!(150));
        assert_eq!(report.message, "Inserted 3 of 5 trades");
    }

    #[tokio::test]
    async fn empty_batch_inserts_nothing() {
        let journal = FlakyJournal::new([]);
        assert_eq!(persist_trades(&journal, &[]).await, 0);
    }

    #[test]
    fn report_serializes_flat() {
        let report = SyncReport::new(SummaryResult::default(), 0, 0);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["insertedTrades"], 0);
        assert_eq!(json["message"], "Inserted 0 of 0 trades");
        assert_eq!(json["totalTrades"], 0);
        assert!(json.get("summary").is_none());
        assert!(json.get("attemptedTrades").is_none());
    }
}
