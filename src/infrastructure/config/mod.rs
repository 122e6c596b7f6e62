//! Infrastructure configuration modules.

pub mod history;
pub mod journal;
pub mod logging;
pub mod settings;
pub mod terminal;
