//! Trade journal (Supabase) configuration.

use serde::Deserialize;

use crate::adapter::outbound::supabase::DEFAULT_TABLE;
use crate::error::{ConfigError, Result};

/// Supabase project settings for the trade journal.
///
/// `url` and `api_key` fall back to `SUPABASE_URL` and `SUPABASE_KEY`.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Target table (default: "trades").
    #[serde(default = "default_table")]
    pub table: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_table() -> String {
    DEFAULT_TABLE.into()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl JournalConfig {
    /// Return the project URL and API key, or the first missing one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when either value is unset or empty.
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let url = self
            .url
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "SUPABASE_URL",
            })?;
        let key = self
            .api_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "SUPABASE_KEY",
            })?;
        Ok((url, key))
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
