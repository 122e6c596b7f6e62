//! Trading terminal bridge configuration.

use serde::Deserialize;

/// Connection settings for the terminal bridge.
///
/// The password is normally supplied through `LEDGERLENS_TERMINAL_PASSWORD`
/// rather than written to the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    /// Base URL of the bridge service.
    #[serde(default = "default_url")]
    pub url: String,
    /// Trade server name, e.g. "MetaQuotes-Demo".
    #[serde(default)]
    pub server: Option<String>,
    /// Account login number.
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "http://127.0.0.1:8700".into()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            server: None,
            login: None,
            password: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
