//! File-based config discovery and loading.
//!
//! Handles finding and loading Weft configuration files from the
//! filesystem. `weft.toml` is the canonical location; a `weft` field inside
//! `package.json` is accepted for projects that keep their tooling config
//! in one place.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::WeftConfig;
use crate::error::{ParseError, Result};
use crate::validation::validate_schema;

impl WeftConfig {
    /// Load and validate a configuration from an explicit path.
    ///
    /// The format follows the file name: `package.json` is read as a JSON
    /// embedding, other `.json` files as plain JSON, everything else as
    /// TOML. The returned config has passed all structural invariants.
    ///
    /// # Errors
    ///
    /// [`ParseError`] variants when the file is missing or malformed,
    /// [`crate::ValidationError`] variants when an invariant is violated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ParseError::NotFound(path.to_path_buf()).into());
        }

        debug!(path = %path.display(), "loading weft config");

        let config = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            load_package_json(path)?
        } else if path.extension() == Some(std::ffi::OsStr::new("json")) {
            load_json(path)?
        } else {
            load_toml(path)?
        };

        validate_schema(&config)?;
        Ok(config)
    }
}

/// File-based configuration discovery.
///
/// Searches conventional locations under a project root. This is primarily
/// for CLI use; library users with an in-memory config should call
/// `WeftConfig::from_value` directly.
///
/// # Example
///
/// ```no_run
/// use weft_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery rooted at a project directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file under the root.
    ///
    /// Searches in this order:
    /// 1. `weft.toml`
    /// 2. `package.json` with a non-null `weft` field
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("weft.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("weft").is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load and validate the discovered config.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::NoConfigFound` when no config file exists.
    pub fn load(&self) -> Result<WeftConfig> {
        let path = self.find().ok_or_else(|| ParseError::NoConfigFound {
            root: self.root.clone(),
        })?;
        WeftConfig::load(path)
    }
}

fn load_toml(path: &Path) -> Result<WeftConfig> {
    let content = fs::read_to_string(path)?;

    // Bridge through a JSON value so TOML and JSON configs share one
    // deserialization path (and one set of error messages).
    let toml_val: toml::Value = toml::from_str(&content).map_err(|e| ParseError::InvalidToml {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let value = serde_json::to_value(toml_val).map_err(|e| ParseError::InvalidJson {
        path: path.to_path_buf(),
        source: e,
    })?;

    WeftConfig::from_value(value)
}

fn load_json(path: &Path) -> Result<WeftConfig> {
    let content = fs::read_to_string(path)?;

    let value: Value = serde_json::from_str(&content).map_err(|e| ParseError::InvalidJson {
        path: path.to_path_buf(),
        source: e,
    })?;

    WeftConfig::from_value(value)
}

fn load_package_json(path: &Path) -> Result<WeftConfig> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ParseError::InvalidJson {
        path: path.to_path_buf(),
        source: e,
    })?;

    let weft_value = parsed
        .get("weft")
        .filter(|v| !v.is_null())
        .ok_or_else(|| ParseError::MissingEmbed(path.to_path_buf()))?;

    WeftConfig::from_value(weft_value.clone())
}
