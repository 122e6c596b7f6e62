//! Trade journal persistence port.

use async_trait::async_trait;

use crate::domain::journal::NormalizedTrade;
use crate::error::Result;

/// External store accepting one journal row per call.
#[async_trait]
pub trait TradeJournal: Send + Sync {
    /// Return the journal name for logging.
    fn name(&self) -> &'static str;

    /// Insert a single row.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the row or cannot be reached.
    async fn insert(&self, trade: &NormalizedTrade) -> Result<()>;
}
