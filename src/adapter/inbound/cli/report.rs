//! Human-readable statistics report for `--pretty`.

use rust_decimal::Decimal;

use crate::application::sync::SyncReport;
use crate::domain::stats::SummaryResult;

use super::output;

fn money(value: Decimal, currency: &str) -> String {
    if currency.is_empty() {
        format!("{value:.2}")
    } else {
        format!("{value:.2} {currency}")
    }
}

/// Print a statistics summary to stdout.
pub fn print_summary(summary: &SummaryResult) {
    let ccy = summary.currency.as_str();

    output::section("Trades");
    output::field("Total", summary.total_trades);
    output::field(
        "Won / Lost",
        format!("{} / {}", summary.winning_trades, summary.losing_trades),
    );
    output::field("Win rate", format!("{:.2}%", summary.win_rate));
    output::field(
        "Buy / Sell",
        format!("{} / {}", summary.buy_trades, summary.sell_trades),
    );
    output::field(
        "Max streak (W / L)",
        format!(
            "{} / {}",
            summary.max_consecutive_wins, summary.max_consecutive_losses
        ),
    );

    output::section("Profit/Loss");
    output::field("Profit", money(summary.total_profit, ccy));
    output::field("Loss", money(summary.total_loss, ccy));
    output::field("Net", money(summary.net_profit, ccy));
    output::field("Buy profit", money(summary.buy_profit, ccy));
    output::field("Sell profit", money(summary.sell_profit, ccy));
    output::field("Best trade", money(summary.best_trade, ccy));
    output::field("Worst trade", money(summary.worst_trade, ccy));
    output::field(
        "Best return",
        format!(
            "{:.2}% ({})",
            summary.best_trade_return_percent,
            money(summary.best_trade_return_usd, ccy)
        ),
    );

    output::section("Volume");
    output::field("Total lots", format!("{:.2}", summary.total_lots));
    output::field("Average lot", format!("{:.2}", summary.average_lot_size));
    output::field("Pips gained", format!("{:.2}", summary.pips_gained));
    output::field("Pips lost", format!("{:.2}", summary.pips_lost));

    output::section("Balance");
    output::field("Deposits", money(summary.deposits, ccy));
    output::field("Withdrawals", money(summary.withdrawals, ccy));
}

/// Print a sync report to stdout.
pub fn print_sync(report: &SyncReport) {
    print_summary(&report.summary);

    output::section("Journal");
    if report.inserted_trades == report.attempted_trades {
        output::success(&report.message);
    } else {
        output::warning(&report.message);
    }
}
