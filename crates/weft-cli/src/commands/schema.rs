//! Schema command implementation.
//!
//! Prints the JSON Schema for weft.toml to stdout, for editor integration
//! and config linting.

use weft_config::WeftConfig;

use crate::error::Result;

/// Execute the schema command.
pub fn execute() -> Result<()> {
    let schema = WeftConfig::json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
