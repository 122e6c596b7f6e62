//! Deal history window configuration.

use serde::Deserialize;

use crate::domain::window::DEFAULT_HISTORY_DAYS;

/// How far back to request deals.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Lookback in days (default: 365).
    #[serde(default = "default_days")]
    pub days: u32,
}

const fn default_days() -> u32 {
    DEFAULT_HISTORY_DAYS
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
        }
    }
}
