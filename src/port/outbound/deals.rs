//! Deal history source port.

use async_trait::async_trait;

use crate::domain::deal::Deal;
use crate::domain::window::HistoryWindow;
use crate::error::Result;

/// Source of an account's ordered deal history.
///
/// # Errors
///
/// [`fetch`](Self::fetch) fails when the source cannot be reached or its
/// payload cannot be decoded. An empty history is `Ok(vec![])`.
#[async_trait]
pub trait DealSource: Send + Sync {
    /// Return the source name for logging.
    fn name(&self) -> &'static str;

    /// Fetch deals inside `window`, in the order the terminal reports them.
    async fn fetch(&self, window: &HistoryWindow) -> Result<Vec<Deal>>;
}
