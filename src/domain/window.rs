//! Time range of account history to request.

use chrono::{DateTime, Duration, Utc};

use super::deal::Deal;

/// Default lookback when nothing else is configured.
pub const DEFAULT_HISTORY_DAYS: u32 = 365;

/// Closed time range `[from, to]` of deals to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl HistoryWindow {
    /// Window covering the last `days` days up to now.
    #[must_use]
    pub fn last_days(days: u32) -> Self {
        Self::ending_at(Utc::now(), days)
    }

    /// Window covering `days` days before `to`.
    #[must_use]
    pub fn ending_at(to: DateTime<Utc>, days: u32) -> Self {
        Self {
            from: to - Duration::days(i64::from(days)),
            to,
        }
    }

    /// Whether a deal falls inside the window.
    ///
    /// Deals without a timestamp are always kept.
    #[must_use]
    pub fn contains(&self, deal: &Deal) -> bool {
        match deal.timestamp() {
            Some(ts) => ts >= self.from && ts <= self.to,
            None => true,
        }
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self::last_days(DEFAULT_HISTORY_DAYS)
    }
}
