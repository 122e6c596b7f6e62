//! Ledgerlens - trading account statistics from deal history.
//!
//! Reads an account's deal history (from a terminal bridge or a JSON export),
//! folds it into performance statistics in a single pass, and can push every
//! trade into a Supabase trade journal.
//!
//! # Architecture
//!
//! - **`domain`** - Deals, the statistics fold, and journal rows
//! - **`port`** - Traits for deal sources and trade journals
//! - **`adapter`** - CLI (inbound); file, terminal bridge and Supabase (outbound)
//! - **`application`** - Journal sync service
//! - **`infrastructure`** - Configuration and logging setup
//!
//! # Example
//!
//! ```
//! use ledgerlens::domain::deal::Deal;
//! use ledgerlens::domain::stats::summarize;
//! use rust_decimal_macros::dec;
//!
//! let summary = summarize(&[Deal::balance(dec!(500))]);
//! assert_eq!(summary.deposits, dec!(500));
//! assert_eq!(summary.total_trades, 0);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
