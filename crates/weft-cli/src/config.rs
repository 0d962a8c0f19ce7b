//! Layered configuration loading for CLI use.
//!
//! The config file is the base layer; `WEFT_`-prefixed environment
//! variables override it (e.g. `WEFT_CONTENT='["./src/**/*.html"]'`).
//! Nested keys use `__` (`WEFT_THEME__EXTEND__...`) so camelCase token
//! names survive.

use std::fs;
use std::path::Path;

use figment::{
    providers::{Env, Format as _, Json, Toml},
    Figment,
};
use weft_config::{validate_schema, ConfigError, ParseError, ValidationError, WeftConfig};

use crate::error::Result;

/// Load a config file with environment-variable overrides applied.
///
/// `package.json` embeddings skip the env layer and load directly; figment
/// providers work on whole files, not embedded fields.
///
/// Syntax errors in the file surface as `ParseError` exactly as they do
/// from `WeftConfig::load`; figment failures past that point can only come
/// from the env layer or a shape mismatch and map to `InvalidValue`.
pub fn load(path: &Path) -> Result<WeftConfig> {
    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return Ok(WeftConfig::load(path)?);
    }

    let content = fs::read_to_string(path)?;

    let file_layer = if path.extension() == Some(std::ffi::OsStr::new("json")) {
        serde_json::from_str::<serde_json::Value>(&content).map_err(|e| {
            ConfigError::from(ParseError::InvalidJson {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Figment::new().merge(Json::string(&content))
    } else {
        toml::from_str::<toml::Value>(&content).map_err(|e| {
            ConfigError::from(ParseError::InvalidToml {
                path: path.to_path_buf(),
                source: Box::new(e),
            })
        })?;
        Figment::new().merge(Toml::string(&content))
    };

    let figment = file_layer.merge(Env::prefixed("WEFT_").split("__"));

    let config: WeftConfig = figment.extract().map_err(|e| {
        ConfigError::from(ValidationError::InvalidValue {
            field: "configuration".to_string(),
            value: path.display().to_string(),
            hint: e.to_string(),
        })
    })?;

    // The figment path bypasses WeftConfig::load, so validate here.
    validate_schema(&config)?;
    Ok(config)
}
