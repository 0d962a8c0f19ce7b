//! Check command implementation.
//!
//! Validates the project configuration without generating anything.

use std::path::PathBuf;

use tracing::debug;
use weft_config::{validate_fs, ConfigDiscovery, ConfigError, ParseError};

use crate::cli::CheckArgs;
use crate::config;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Discover the config file (or use `--config`)
/// 2. Load it with environment overrides and check structural invariants
/// 3. Check that the scan root of every content pattern exists (unless `--no-fs`)
/// 4. Print a summary of patterns, theme tokens, and plugins
///
/// # Errors
///
/// Returns errors for missing config files, malformed data, or invariant
/// violations. The process exits non-zero in all of those cases, which is
/// what CI pipelines key off.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let cwd = std::env::current_dir()?;
    let path = resolve_config_path(&args, &cwd)?;
    ui::info(&format!("Using config: {}", path.display()));

    let config = config::load(&path)?;
    ui::success("Configuration is valid!");

    ui::info(&format!(
        "{} content pattern{}",
        config.content.len(),
        if config.content.len() == 1 { "" } else { "s" }
    ));
    for pattern in &config.content {
        ui::success(&format!("  {pattern}"));
    }

    if args.no_fs {
        debug!("skipping filesystem checks");
    } else {
        // Resolve scan roots against the directory holding the config file,
        // not the cwd, so `--config path/to/weft.toml` behaves the same as
        // running from that directory.
        let root = path.parent().map(PathBuf::from).unwrap_or(cwd);
        if let Err(err) = validate_fs(&config, &root) {
            ui::error("Scan root check failed");
            return Err(err.into());
        }
        ui::success("All scan roots exist");
    }

    let categories = config.theme.extend.categories();
    if categories.is_empty() {
        ui::info("No theme extensions");
    } else {
        ui::info(&format!("Theme extensions: {}", categories.join(", ")));
    }

    if !config.plugins.is_empty() {
        // Reserved field; nothing loads plugins yet.
        ui::warning(&format!(
            "{} plugin{} listed, but plugin loading is not implemented",
            config.plugins.len(),
            if config.plugins.len() == 1 { "" } else { "s" }
        ));
    }

    ui::success("All checks passed!");
    Ok(())
}

fn resolve_config_path(args: &CheckArgs, cwd: &std::path::Path) -> Result<PathBuf> {
    if let Some(path) = &args.config {
        if !path.exists() {
            return Err(ConfigError::from(ParseError::NotFound(path.clone())).into());
        }
        return Ok(path.clone());
    }

    ConfigDiscovery::new(cwd)
        .find()
        .ok_or_else(|| {
            ConfigError::from(ParseError::NoConfigFound {
                root: cwd.to_path_buf(),
            })
            .into()
        })
}
