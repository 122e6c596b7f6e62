//! Exchange-agnostic domain types: deals, statistics, and journal rows.

pub mod deal;
pub mod journal;
pub mod stats;
pub mod window;
