//! Outbound adapters (driven side).
//!
//! - [`file`] - Deal history from a JSON export
//! - [`terminal`] - Deal history from the trading terminal's HTTP bridge
//! - [`supabase`] - Trade journal rows over the Supabase REST API

pub mod file;
pub mod supabase;
pub mod terminal;
