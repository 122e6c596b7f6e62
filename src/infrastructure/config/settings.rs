//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from an optional TOML file, then environment
//! variables override the endpoints and secrets:
//!
//! | Variable | Field |
//! |---|---|
//! | `LEDGERLENS_TERMINAL_URL` | `terminal.url` |
//! | `LEDGERLENS_TERMINAL_PASSWORD` | `terminal.password` |
//! | `SUPABASE_URL` | `journal.url` |
//! | `SUPABASE_KEY` | `journal.api_key` |
//!
//! # Example
//!
//! ```no_run
//! use ledgerlens::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("ledgerlens.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::history::HistoryConfig;
use super::journal::JournalConfig;
use super::logging::LoggingConfig;
use super::terminal::TerminalConfig;
use crate::error::{ConfigError, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "ledgerlens.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Deal history window.
    #[serde(default)]
    pub history: HistoryConfig,

    /// Trading terminal bridge connection.
    #[serde(default)]
    pub terminal: TerminalConfig,

    /// Trade journal destination for `sync`.
    #[serde(default)]
    pub journal: JournalConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Environment overrides are not applied here; see [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise start from defaults.
    ///
    /// Environment overrides apply in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Overwrite endpoint and secret fields from `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(url) = get("LEDGERLENS_TERMINAL_URL") {
            self.terminal.url = url;
        }
        if let Some(password) = get("LEDGERLENS_TERMINAL_PASSWORD") {
            self.terminal.password = Some(password);
        }
        if let Some(url) = get("SUPABASE_URL") {
            self.journal.url = Some(url);
        }
        if let Some(key) = get("SUPABASE_KEY") {
            self.journal.api_key = Some(key);
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.history.days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "days",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }
        if self.terminal.url.is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }
        if let Err(e) = url::Url::parse(&self.terminal.url) {
            return Err(ConfigError::InvalidValue {
                field: "url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.terminal.timeout_secs == 0 || self.journal.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(journal_url) = self.journal.url.as_deref().filter(|u| !u.is_empty()) {
            if let Err(e) = url::Url::parse(journal_url) {
                return Err(ConfigError::InvalidValue {
                    field: "journal_url",
                    reason: e.to_string(),
                }
                .into());
            }
        }
        if self.journal.table.is_empty() {
            return Err(ConfigError::MissingField { field: "table" }.into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber based on logging config.
    pub fn init_logging(&self, verbose: u8) {
        self.logging.init(verbose);
    }
}
