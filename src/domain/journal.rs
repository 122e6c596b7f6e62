//! Trade journal rows derived from deals.
//!
//! A [`NormalizedTrade`] reshapes one trade-opening deal into the flat row
//! layout of the external trade journal. The terminal only reports a single
//! price per deal, so entry and exit carry the same value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::deal::{Deal, DealType};

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
}

/// Instrument class guessed from the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstrumentType {
    Forex,
    Stock,
}

impl InstrumentType {
    /// Symbols quoting against the yen are treated as forex, everything else
    /// as a stock.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        if symbol.contains("JPY") {
            Self::Forex
        } else {
            Self::Stock
        }
    }
}

/// Outcome label by profit sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WinLoss {
    Win,
    Loss,
    Breakeven,
}

impl WinLoss {
    #[must_use]
    pub fn from_profit(profit: Decimal) -> Self {
        if profit > Decimal::ZERO {
            Self::Win
        } else if profit < Decimal::ZERO {
            Self::Loss
        } else {
            Self::Breakeven
        }
    }
}

/// One journal row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTrade {
    pub date: Option<NaiveDate>,
    pub ticker: String,
    pub direction: Direction,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub entry: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub exit: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub pnl: Decimal,
    pub notes: String,
    pub tags: Vec<String>,
    pub strategy: String,
    pub market_condition: String,
    pub instrument_type: InstrumentType,
    pub win_loss: WinLoss,
    pub screenshot_url: String,
}

impl NormalizedTrade {
    /// Build a row for a trade-opening buy or sell deal.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_deal(deal: &Deal) -> Option<Self> {
        if !deal.is_opening() {
            return None;
        }
        let direction = match deal.kind {
            DealType::Buy => Direction::Buy,
            DealType::Sell => Direction::Sell,
            DealType::Balance | DealType::Other => return None,
        };
        let ticker = deal.symbol.clone().unwrap_or_default();

        Some(Self {
            date: deal.timestamp().map(|ts| ts.date_naive()),
            instrument_type: InstrumentType::from_symbol(&ticker),
            ticker,
            direction,
            entry: deal.price,
            exit: deal.price,
            size: deal.lot(),
            pnl: deal.profit,
            notes: String::new(),
            tags: Vec::new(),
            strategy: String::new(),
            market_condition: String::new(),
            win_loss: WinLoss::from_profit(deal.profit),
            screenshot_url: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn jpy_symbols_are_forex() {
        assert_eq!(InstrumentType::from_symbol("USDJPY"), InstrumentType::Forex);
        assert_eq!(InstrumentType::from_symbol("EURUSD"), InstrumentType::Stock);
        assert_eq!(InstrumentType::from_symbol(""), InstrumentType::Stock);
    }

    #[test]
    fn win_loss_follows_profit_sign() {
        assert_eq!(WinLoss::from_profit(dec!(0.01)), WinLoss::Win);
        assert_eq!(WinLoss::from_profit(dec!(-3)), WinLoss::Loss);
        assert_eq!(WinLoss::from_profit(dec!(0)), WinLoss::Breakeven);
    }

    #[test]
    fn buy_opening_maps_every_column() {
        let deal = Deal::opening(DealType::Buy, dec!(-0.3), dec!(42.5))
            .with_symbol("GBPJPY")
            .with_price(dec!(187.25))
            .at(1_700_000_000);

        let trade = NormalizedTrade::from_deal(&deal).unwrap();

        assert_eq!(trade.date, NaiveDate::from_ymd_opt(2023, 11, 14));
        assert_eq!(trade.ticker, "GBPJPY");
        assert_eq!(trade.direction, Direction::Buy);
        assert_eq!(trade.entry, Some(dec!(187.25)));
        assert_eq!(trade.exit, Some(dec!(187.25)));
        assert_eq!(trade.size, dec!(0.3));
        assert_eq!(trade.pnl, dec!(42.5));
        assert_eq!(trade.instrument_type, InstrumentType::Forex);
        assert_eq!(trade.win_loss, WinLoss::Win);
        assert!(trade.notes.is_empty());
        assert!(trade.tags.is_empty());
    }

    #[test]
    fn non_trade_deals_are_skipped() {
        assert!(NormalizedTrade::from_deal(&Deal::balance(dec!(100))).is_none());

        let closing = Deal::opening(DealType::Sell, dec!(1), dec!(5)).with_entry(None);
        assert!(NormalizedTrade::from_deal(&closing).is_none());

        let credit = Deal::opening(DealType::Other, dec!(1), dec!(5));
        assert!(NormalizedTrade::from_deal(&credit).is_none());
    }

    #[test]
    fn serializes_to_journal_columns() {
        let deal = Deal::opening(DealType::Sell, dec!(1), dec!(-20))
            .with_symbol("AAPL")
            .with_price(dec!(190.5))
            .at(1_700_000_000);
        let json = serde_json::to_value(NormalizedTrade::from_deal(&deal).unwrap()).unwrap();

        assert_eq!(json["date"], "2023-11-14");
        assert_eq!(json["direction"], "SELL");
        assert_eq!(json["entry"], 190.5);
        assert_eq!(json["exit"], 190.5);
        assert_eq!(json["size"], 1.0);
        assert_eq!(json["pnl"], -20.0);
        assert_eq!(json["instrument_type"], "STOCK");
        assert_eq!(json["win_loss"], "LOSS");
        assert_eq!(json["screenshot_url"], "");
        assert_eq!(json["tags"], serde_json::json!([]));
    }
}
