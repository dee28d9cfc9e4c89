//! Shared printing helpers for commands.

use std::fmt::Display;

use anyhow::Result;
use console::style;
use serde::Serialize;

/// Prints `value` as pretty JSON, or as a styled `label value` line.
pub fn emit<T: Serialize + Display>(json: bool, label: &str, value: &T) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{} {}", style(label).cyan().bold(), value);
    }
    Ok(())
}

