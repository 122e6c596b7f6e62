//! Deal history statistics.
//!
//! [`RunningStats`] folds an ordered deal sequence in a single forward pass.
//! [`RunningStats::finish`] derives the ratios and rounds everything into a
//! [`SummaryResult`].
//!
//! The pip and return figures are rough estimates: pips are
//! `profit / (lot * 10)` regardless of the symbol's pip size, and the return
//! is profit over `price * lot`. Consumers compare against these exact
//! formulas, so they must stay as they are. Results beyond the `Decimal`
//! range clamp to `Decimal::MAX` / `Decimal::MIN` with a warning.
//!
//! # Examples
//!
//! ```
//! use ledgerlens::domain::deal::{Deal, DealType};
//! use ledgerlens::domain::stats::summarize;
//! use rust_decimal_macros::dec;
//!
//! let deals = vec![
//!     Deal::opening(DealType::Buy, dec!(1.0), dec!(100)).with_price(dec!(1.1)),
//!     Deal::opening(DealType::Sell, dec!(0.5), dec!(-50)).with_price(dec!(1.1)),
//! ];
//!
//! let summary = summarize(&deals);
//! assert_eq!(summary.total_trades, 2);
//! assert_eq!(summary.win_rate, dec!(50));
//! assert_eq!(summary.net_profit, dec!(50));
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::deal::{Deal, DealType};
use super::journal::NormalizedTrade;

/// Decimal places kept in every monetary and percentage output.
const OUTPUT_DP: u32 = 2;

/// Accumulator for a single aggregation pass.
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    pub total_trades: u32,
    pub winning_trades: u32,
    pub losing_trades: u32,
    pub buy_trades: u32,
    pub sell_trades: u32,

    pub total_profit: Decimal,
    /// Sum of absolute losses.
    pub total_loss: Decimal,
    pub net_profit: Decimal,
    pub buy_profit: Decimal,
    pub sell_profit: Decimal,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
    pub total_lots: Decimal,
    pub pips_gained: Decimal,
    pub pips_lost: Decimal,

    pub current_wins: u32,
    pub current_losses: u32,
    pub max_consecutive_wins: u32,
    pub max_consecutive_losses: u32,

    pub lot_sizes: Vec<Decimal>,
    /// Estimated return percent per trade with a known price.
    pub trade_returns: Vec<Decimal>,
    /// Raw profit of the same trades as `trade_returns`.
    pub trade_returns_usd: Vec<Decimal>,

    pub best_trade: Option<Decimal>,
    pub worst_trade: Option<Decimal>,
    pub currency: Option<String>,
}

impl RunningStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one deal into the running totals.
    ///
    /// Returns the journal row for trade-opening buys and sells, built from
    /// the same classification that updated the counters.
    pub fn record(&mut self, deal: &Deal) -> Option<NormalizedTrade> {
        if deal.is_opening() {
            self.record_trade(deal);
            NormalizedTrade::from_deal(deal)
        } else {
            if deal.is_balance() {
                self.record_balance(deal.profit);
            }
            None
        }
    }

    fn record_trade(&mut self, deal: &Deal) {
        let lot = deal.lot();
        let profit = deal.profit;

        self.total_trades += 1;
        self.lot_sizes.push(lot);
        accumulate(&mut self.total_lots, lot, "total_lots");
        accumulate(&mut self.net_profit, profit, "net_profit");

        if profit > Decimal::ZERO {
            self.winning_trades += 1;
            accumulate(&mut self.total_profit, profit, "total_profit");
            self.current_wins += 1;
            self.current_losses = 0;
            self.max_consecutive_wins = self.max_consecutive_wins.max(self.current_wins);
        } else if profit < Decimal::ZERO {
            self.losing_trades += 1;
            accumulate(&mut self.total_loss, profit.abs(), "total_loss");
            self.current_losses += 1;
            self.current_wins = 0;
            self.max_consecutive_losses = self.max_consecutive_losses.max(self.current_losses);
        } else {
            self.current_wins = 0;
            self.current_losses = 0;
        }

        self.best_trade = Some(self.best_trade.map_or(profit, |best| best.max(profit)));
        self.worst_trade = Some(self.worst_trade.map_or(profit, |worst| worst.min(profit)));

        match deal.kind {
            DealType::Buy => {
                self.buy_trades += 1;
                accumulate(&mut self.buy_profit, profit, "buy_profit");
            }
            DealType::Sell => {
                self.sell_trades += 1;
                accumulate(&mut self.sell_profit, profit, "sell_profit");
            }
            DealType::Balance | DealType::Other => {}
        }

        if deal.price.is_some() && deal.symbol.is_some() {
            let pips = estimate_pips(profit, lot).abs();
            if profit > Decimal::ZERO {
                accumulate(&mut self.pips_gained, pips, "pips_gained");
            } else if profit < Decimal::ZERO {
                accumulate(&mut self.pips_lost, pips, "pips_lost");
            }
        }

        if let Some(price) = deal.price.filter(|p| *p > Decimal::ZERO) {
            self.trade_returns.push(estimate_return_pct(profit, price, lot));
            self.trade_returns_usd.push(profit);
        }

        if self.currency.is_none() {
            self.currency = deal.currency().map(str::to_string);
        }
    }

    fn record_balance(&mut self, profit: Decimal) {
        if profit > Decimal::ZERO {
            accumulate(&mut self.deposits, profit, "deposits");
        } else if profit < Decimal::ZERO {
            accumulate(&mut self.withdrawals, profit.abs(), "withdrawals");
        }
    }

    /// Average lot size, zero when no trades were recorded.
    #[must_use]
    pub fn average_lot_size(&self) -> Decimal {
        if self.lot_sizes.is_empty() {
            return Decimal::ZERO;
        }
        let sum = self
            .lot_sizes
            .iter()
            .fold(Decimal::ZERO, |acc, lot| acc.saturating_add(*lot));
        sum / Decimal::from(self.lot_sizes.len())
    }

    /// Winning trades as a percentage of all trades, zero when there are none.
    #[must_use]
    pub fn win_rate(&self) -> Decimal {
        if self.total_trades == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.winning_trades) / Decimal::from(self.total_trades) * Decimal::ONE_HUNDRED
    }

    /// Derive the rounded summary.
    #[must_use]
    pub fn finish(self) -> SummaryResult {
        let best_return_pct = max_or_zero(&self.trade_returns);
        let best_return_usd = max_or_zero(&self.trade_returns_usd);

        SummaryResult {
            total_trades: self.total_trades,
            winning_trades: self.winning_trades,
            losing_trades: self.losing_trades,
            win_rate: round(self.win_rate()),
            total_profit: round(self.total_profit),
            total_loss: round(self.total_loss),
            net_profit: round(self.net_profit),
            max_consecutive_wins: self.max_consecutive_wins,
            max_consecutive_losses: self.max_consecutive_losses,
            average_lot_size: round(self.average_lot_size()),
            total_lots: round(self.total_lots),
            pips_gained: round(self.pips_gained),
            pips_lost: round(self.pips_lost),
            best_trade: round(self.best_trade.unwrap_or_default()),
            worst_trade: round(self.worst_trade.unwrap_or_default()),
            best_trade_return_percent: round(best_return_pct),
            best_trade_return_usd: round(best_return_usd),
            buy_trades: self.buy_trades,
            sell_trades: self.sell_trades,
            buy_profit: round(self.buy_profit),
            sell_profit: round(self.sell_profit),
            deposits: round(self.deposits),
            withdrawals: round(self.withdrawals),
            currency: self.currency.unwrap_or_default(),
        }
    }
}

/// `profit / (lot * 10)`, zero for an empty lot.
fn estimate_pips(profit: Decimal, lot: Decimal) -> Decimal {
    if lot <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let divisor = saturating_mul(lot, Decimal::TEN, "pips");
    saturating_div(profit, divisor, "pips")
}

/// `profit / (price * lot) * 100`, zero for an empty lot.
fn estimate_return_pct(profit: Decimal, price: Decimal, lot: Decimal) -> Decimal {
    if lot <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let ratio = saturating_div(profit, saturating_mul(price, lot, "return"), "return");
    saturating_mul(ratio, Decimal::ONE_HUNDRED, "return")
}

/// Add `value` to a running total, clamping at the `Decimal` range.
fn accumulate(total: &mut Decimal, value: Decimal, metric: &'static str) {
    let current = *total;
    *total = current.checked_add(value).unwrap_or_else(|| {
        warn!(metric, %value, "Running total overflowed; clamped");
        current.saturating_add(value)
    });
}

fn saturating_mul(lhs: Decimal, rhs: Decimal, metric: &'static str) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or_else(|| {
        warn!(metric, %lhs, %rhs, "Estimate overflowed; clamped");
        lhs.saturating_mul(rhs)
    })
}

/// Division clamped to `Decimal::MAX` or `Decimal::MIN` by the result sign.
/// The divisor is always positive here.
fn saturating_div(lhs: Decimal, rhs: Decimal, metric: &'static str) -> Decimal {
    lhs.checked_div(rhs).unwrap_or_else(|| {
        warn!(metric, %lhs, %rhs, "Estimate overflowed; clamped");
        if lhs.is_sign_negative() == rhs.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

fn max_or_zero(values: &[Decimal]) -> Decimal {
    values.iter().copied().max().unwrap_or_default()
}

fn round(value: Decimal) -> Decimal {
    value.round_dp(OUTPUT_DP)
}

/// Rounded account statistics, serialized with the dashboard's key names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub total_trades: u32,
    pub winning_trades: u32,
    pub losing_trades: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub win_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_profit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_loss: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_profit: Decimal,
    pub max_consecutive_wins: u32,
    pub max_consecutive_losses: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_lot_size: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_lots: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub pips_gained: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub pips_lost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub best_trade: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub worst_trade: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub best_trade_return_percent: Decimal,
    #[serde(rename = "bestTradeReturnUSD", with = "rust_decimal::serde::float")]
    pub best_trade_return_usd: Decimal,
    pub buy_trades: u32,
    pub sell_trades: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub buy_profit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub sell_profit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub deposits: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub withdrawals: Decimal,
    pub currency: String,
}

/// Summary plus the journal rows produced by the same pass.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub summary: SummaryResult,
    pub trades: Vec<NormalizedTrade>,
}

/// Aggregate deals into a summary.
#[must_use]
pub fn summarize(deals: &[Deal]) -> SummaryResult {
    let mut stats = RunningStats::new();
    for deal in deals {
        stats.record(deal);
    }
    stats.finish()
}

/// Aggregate deals into a summary and collect journal rows.
#[must_use]
pub fn aggregate(deals: &[Deal]) -> Aggregate {
    let mut stats = RunningStats::new();
    let trades = deals.iter().filter_map(|deal| stats.record(deal)).collect();
    Aggregate {
        summary: stats.finish(),
        trades,
    }
}
