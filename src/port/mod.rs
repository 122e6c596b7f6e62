//! Port definitions for the hexagonal architecture.
//!
//! Outbound ports are the boundaries to the trading terminal and the trade
//! journal. Adapters in [`crate::adapter::outbound`] implement them.

pub mod outbound;
