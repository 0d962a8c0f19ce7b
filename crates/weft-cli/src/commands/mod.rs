//! Command implementations for the Weft CLI.
//!
//! - [`check`] - Load and validate the project configuration
//! - [`init`] - Scaffold a starter weft.toml
//! - [`schema`] - Print the config JSON Schema
//!
//! Each command provides an `execute` function taking the parsed command
//! arguments and returning a Result.

pub mod check;
pub mod init;
pub mod schema;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use schema::execute as schema_execute;
