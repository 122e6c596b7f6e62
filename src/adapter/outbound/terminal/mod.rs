//! Trading terminal HTTP bridge client.
//!
//! The terminal itself only exposes a local API, so a small bridge service
//! sitting next to it owns the session. This client asks the bridge for the
//! deal history of one account:
//!
//! ```text
//! POST {base_url}/history/deals
//! {"server": "...", "login": 12345, "password": "...", "from": 1690000000, "to": 1700000000}
//! ```
//!
//! and expects a JSON array of deals back.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::deal::Deal;
use crate::domain::window::HistoryWindow;
use crate::error::{Error, Result};
use crate::port::outbound::deals::DealSource;

/// Account login for the terminal session.
#[derive(Clone)]
pub struct TerminalCredentials {
    pub server: String,
    pub login: u64,
    pub password: String,
}

impl TerminalCredentials {
    /// Build credentials from raw strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `login` is not an account number.
    pub fn parse(
        server: impl Into<String>,
        login: &str,
        password: impl Into<String>,
    ) -> Result<Self> {
        let login = login
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidInput(format!("login must be an account number, got '{login}'")))?;
        Ok(Self {
            server: server.into(),
            login,
            password: password.into(),
        })
    }
}

impl fmt::Debug for TerminalCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalCredentials")
            .field("server", &self.server)
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Serialize)]
struct HistoryRequest<'a> {
    server: &'a str,
    login: u64,
    password: &'a str,
    from: i64,
    to: i64,
}

/// Deal source backed by the terminal bridge.
#[derive(Debug)]
pub struct TerminalBridge {
    client: Client,
    base_url: String,
    credentials: TerminalCredentials,
}

impl TerminalBridge {
    /// Create a bridge client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        credentials: TerminalCredentials,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            credentials,
        })
    }

    fn history_url(&self) -> String {
        format!("{}/history/deals", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl DealSource for TerminalBridge {
    fn name(&self) -> &'static str {
        "terminal"
    }

    async fn fetch(&self, window: &HistoryWindow) -> Result<Vec<Deal>> {
        let request = HistoryRequest {
            server: &self.credentials.server,
            login: self.credentials.login,
            password: &self.credentials.password,
            from: window.from.timestamp(),
            to: window.to.timestamp(),
        };

        debug!(
            server = %self.credentials.server,
            login = self.credentials.login,
            from = %window.from,
            to = %window.to,
            "Requesting deal history"
        );

        let response = self
            .client
            .post(self.history_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Connection(format!("bridge returned {status}: {body}")));
        }

        let deals = response
            .json::<Vec<Deal>>()
            .await
            .map_err(|e| Error::Connection(format!("bridge returned an invalid deal list: {e}")))?;
        info!(
            server = %self.credentials.server,
            login = self.credentials.login,
            deals = deals.len(),
            "Fetched deal history"
        );
        Ok(deals)
    }
}
