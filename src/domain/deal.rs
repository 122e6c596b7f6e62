//! Deal records as reported by the trading terminal.
//!
//! A [`Deal`] is one ledger entry of the account history. Only two shapes
//! matter to the statistics:
//!
//! - **Trade openings**: `entry == Some(DealEntry::In)`
//! - **Balance operations**: `kind == DealType::Balance` (deposits and withdrawals)
//!
//! Everything else (closing deals, credits, commissions) is carried through
//! decoding but ignored by the aggregation.
//!
//! Entry markers and deal types decode from either the terminal's numeric
//! codes or their names:
//!
//! ```
//! use ledgerlens::domain::deal::{Deal, DealEntry, DealType};
//!
//! let deal: Deal = serde_json::from_str(
//!     r#"{"time": 1700000000, "symbol": "EURUSD", "entry": 0, "type": "DEAL_TYPE_SELL",
//!         "volume": 0.5, "price": 1.1, "profit": -12.5, "currency": "USD"}"#,
//! ).unwrap();
//!
//! assert_eq!(deal.entry, Some(DealEntry::In));
//! assert_eq!(deal.kind, DealType::Sell);
//! assert!(deal.is_opening());
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Raw wire representation of an entry marker or deal type.
///
/// Terminals export either the numeric enum value or its symbolic name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DealCode {
    Code(i64),
    Name(String),
}

impl DealCode {
    /// Lowercased name with any `deal_entry_` / `deal_type_` prefix removed.
    fn normalized_name(name: &str) -> String {
        let lower = name.trim().to_ascii_lowercase();
        lower
            .strip_prefix("deal_entry_")
            .or_else(|| lower.strip_prefix("deal_type_"))
            .unwrap_or(&lower)
            .to_string()
    }
}

/// Direction of a deal relative to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "DealCode")]
pub enum DealEntry {
    /// Opens (or adds to) a position.
    In,
    /// Closes a position.
    Out,
    /// Reverses a position.
    InOut,
    /// Closed by an opposite position.
    OutBy,
    Other,
}

impl From<DealCode> for DealEntry {
    fn from(code: DealCode) -> Self {
        match code {
            DealCode::Code(0) => Self::In,
            DealCode::Code(1) => Self::Out,
            DealCode::Code(2) => Self::InOut,
            DealCode::Code(3) => Self::OutBy,
            DealCode::Code(_) => Self::Other,
            DealCode::Name(name) => match DealCode::normalized_name(&name).as_str() {
                "in" => Self::In,
                "out" => Self::Out,
                "inout" => Self::InOut,
                "out_by" | "outby" => Self::OutBy,
                _ => Self::Other,
            },
        }
    }
}

/// Kind of ledger operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "DealCode")]
pub enum DealType {
    Buy,
    Sell,
    /// Deposit or withdrawal.
    Balance,
    /// Credits, charges, commissions, and anything the terminal adds later.
    #[default]
    Other,
}

impl From<DealCode> for DealType {
    fn from(code: DealCode) -> Self {
        match code {
            DealCode::Code(0) => Self::Buy,
            DealCode::Code(1) => Self::Sell,
            DealCode::Code(2) => Self::Balance,
            DealCode::Code(_) => Self::Other,
            DealCode::Name(name) => match DealCode::normalized_name(&name).as_str() {
                "buy" => Self::Buy,
                "sell" => Self::Sell,
                "balance" => Self::Balance,
                _ => Self::Other,
            },
        }
    }
}

/// One entry of the account's deal history.
///
/// Attributes a terminal may omit are `Option`s; the aggregation skips the
/// metrics that depend on them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Deal {
    #[serde(default)]
    pub ticket: Option<u64>,
    /// Unix seconds. Zero when unknown.
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub entry: Option<DealEntry>,
    #[serde(rename = "type", default)]
    pub kind: DealType,
    /// Signed volume in lots.
    #[serde(default)]
    pub volume: Decimal,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub profit: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
}

impl Deal {
    /// Create a trade-opening deal.
    #[must_use]
    pub fn opening(kind: DealType, volume: Decimal, profit: Decimal) -> Self {
        Self {
            ticket: None,
            time: 0,
            symbol: None,
            entry: Some(DealEntry::In),
            kind,
            volume,
            price: None,
            profit,
            currency: None,
        }
    }

    /// Create a balance operation. Positive profit is a deposit.
    #[must_use]
    pub fn balance(profit: Decimal) -> Self {
        Self {
            entry: None,
            ..Self::opening(DealType::Balance, Decimal::ZERO, profit)
        }
    }

    #[must_use]
    pub fn with_entry(mut self, entry: Option<DealEntry>) -> Self {
        self.entry = entry;
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    #[must_use]
    pub fn at(mut self, time: i64) -> Self {
        self.time = time;
        self
    }

    /// True when this deal opens a trade.
    #[must_use]
    pub fn is_opening(&self) -> bool {
        self.entry == Some(DealEntry::In)
    }

    /// True when this deal is a deposit or withdrawal.
    #[must_use]
    pub fn is_balance(&self) -> bool {
        self.kind == DealType::Balance
    }

    /// Unsigned trade size in lots.
    #[must_use]
    pub fn lot(&self) -> Decimal {
        self.volume.abs()
    }

    /// Deal time, or `None` when the terminal did not report one.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if self.time == 0 {
            return None;
        }
        DateTime::from_timestamp(self.time, 0)
    }

    /// Currency code, ignoring empty values.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref().filter(|c| !c.is_empty())
    }
}
