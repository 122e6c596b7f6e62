//! Stdout rendering.
//!
//! Machine output is one JSON line per invocation. The `--pretty` report
//! uses the section/field helpers below.

use std::fmt::Display;

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

use crate::error::Result;

/// Print a value as a single JSON line.
pub fn emit<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Print the single-key error record.
pub fn error_record(message: &str) {
    println!("{}", json!({ "error": message }));
}

/// Print a section header.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<22} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message);
}
