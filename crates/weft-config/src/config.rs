//! High-level configuration structure for Weft.
//!
//! This module provides the main `WeftConfig` struct. For file discovery
//! and loading, see the `discovery` module; for invariant checking, see
//! `validation`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result as ConfigResult, ValidationError};
use crate::theme::ThemeConfig;

/// Build configuration for the Weft utility-class generator.
///
/// This is the Rust shape of a `weft.toml` file: which source files to scan
/// for class names, which theme tokens to add, and (reserved) which plugins
/// to register. The generator reads it once at startup; it is never mutated
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeftConfig {
    /// Glob patterns for files to scan for class names
    ///
    /// e.g. `["./src/**/*.{rs,html}", "./assets/**/*.{html,css}"]`.
    /// Scanning is a set union, so order only affects tooling output.
    #[serde(default)]
    pub content: Vec<String>,

    /// Theme customization merged over the generator's defaults
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Plugin names to register. Reserved; currently always empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
}

impl WeftConfig {
    /// Create from a `serde_json::Value` (for programmatic config)
    ///
    /// Structural validation only; run [`crate::validate_schema`] or load
    /// through [`WeftConfig::load`] to also check invariants.
    ///
    /// # Example
    ///
    /// ```
    /// use weft_config::WeftConfig;
    /// use serde_json::json;
    ///
    /// let config = WeftConfig::from_value(json!({
    ///     "content": ["./src/**/*.html"]
    /// })).unwrap();
    /// assert_eq!(config.content, vec!["./src/**/*.html"]);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        let config: WeftConfig =
            serde_json::from_value(value).map_err(|e| ValidationError::InvalidValue {
                field: "config".to_string(),
                value: "<object>".to_string(),
                hint: e.to_string(),
            })?;
        Ok(config)
    }

    /// Convert to a `serde_json::Value`
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            ValidationError::InvalidValue {
                field: "config".to_string(),
                value: "<object>".to_string(),
                hint: e.to_string(),
            }
            .into()
        })
    }

    /// Starter configuration written by `weft init`.
    ///
    /// Scans Rust/HTML sources plus static assets and adds an Inter-first
    /// sans font stack.
    pub fn starter() -> Self {
        let mut config = Self {
            content: vec![
                "./src/**/*.{rs,html}".to_string(),
                "./assets/**/*.{html,css}".to_string(),
            ],
            ..Self::default()
        };
        config.theme.extend.font_family.insert(
            "sans".to_string(),
            vec![
                "Inter".to_string(),
                "system-ui".to_string(),
                "sans-serif".to_string(),
            ],
        );
        config
    }

    /// Generate the JSON Schema for `weft.toml` / embedded `weft` fields.
    pub fn json_schema() -> Value {
        let schema = schemars::schema_for!(WeftConfig);
        serde_json::to_value(schema).expect("schema serialization should never fail")
    }
}
