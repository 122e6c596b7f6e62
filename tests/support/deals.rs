//! Deal fixtures in the terminal export format.

use std::io::Write;

use serde_json::{json, Value};
use tempfile::NamedTempFile;

/// Trade-opening deal JSON.
pub fn opening(kind: &str, symbol: &str, volume: f64, price: f64, profit: f64) -> Value {
    json!({
        "ticket": 1,
        "time": 0,
        "symbol": symbol,
        "entry": "in",
        "type": kind,
        "volume": volume,
        "price": price,
        "profit": profit,
        "currency": "USD",
    })
}

/// Balance operation JSON.
pub fn balance(profit: f64) -> Value {
    json!({ "time": 0, "type": "balance", "profit": profit })
}

/// Closing deal JSON, ignored by the statistics.
pub fn closing(kind: &str, profit: f64) -> Value {
    json!({ "time": 0, "entry": "out", "type": kind, "volume": 1.0, "profit": profit })
}

/// The two-trade EURUSD history used across tests.
pub fn two_trades() -> Vec<Value> {
    vec![
        opening("buy", "EURUSD", 1.0, 1.1, 100.0),
        opening("sell", "EURUSD", 0.5, 1.1, -50.0),
    ]
}

/// Write deals to a temporary JSON export.
pub fn export(deals: &[Value]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create deal export");
    write!(file, "{}", Value::Array(deals.to_vec())).expect("write deal export");
    file
}
