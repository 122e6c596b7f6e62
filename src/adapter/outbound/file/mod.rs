//! Deal history read from a JSON export.
//!
//! The export is a JSON array of deal objects, as written by the terminal's
//! history export script. A path of `-` reads from stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::deal::Deal;
use crate::domain::window::HistoryWindow;
use crate::error::{Error, Result};
use crate::port::outbound::deals::DealSource;

/// Reads deals from a file or stdin.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_payload(&self) -> Result<String> {
        if self.path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        std::fs::read_to_string(&self.path).map_err(|e| {
            Error::InvalidInput(format!("cannot read {}: {e}", self.path.display()))
        })
    }
}

/// Decode a JSON array of deals. Blank input is an empty history.
pub fn parse_deals(payload: &str) -> Result<Vec<Deal>> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(payload)?)
}

#[async_trait]
impl DealSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self, window: &HistoryWindow) -> Result<Vec<Deal>> {
        let payload = self.read_payload()?;
        let deals = parse_deals(&payload)?;
        let total = deals.len();

        let in_window: Vec<Deal> = deals.into_iter().filter(|d| window.contains(d)).collect();
        debug!(
            path = %self.path.display(),
            total,
            kept = in_window.len(),
            "Loaded deal export"
        );
        Ok(in_window)
    }
}
