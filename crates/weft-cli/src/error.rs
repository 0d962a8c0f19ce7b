//! Error handling for the Weft CLI.
//!
//! A thin hierarchy over the library's `ConfigError`, plus conversion to
//! miette reports at the binary boundary.

use std::path::PathBuf;

use thiserror::Error;
use weft_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A file the command needs already exists or is missing
    #[error("File already exists: {}\n\nHint: Pass --force to overwrite", .0.display())]
    AlreadyExists(PathBuf),

    /// I/O errors from filesystem operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a CliError to a miette Report for display.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    miette::miette!("{}", err)
}
