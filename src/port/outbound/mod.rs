//! Outbound ports (driven side).

pub mod deals;
pub mod journal;
