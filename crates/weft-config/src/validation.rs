//! Pluggable config validation strategies.
//!
//! Separates structural invariant checking (for library use) from
//! filesystem checks (for CLI use).

use std::path::Path;

use crate::config::WeftConfig;
use crate::error::{Result, ValidationError};
use crate::pattern;

/// Trait for pluggable config validation strategies.
pub trait ConfigValidator {
    fn validate(&self, config: &WeftConfig) -> Result<()>;
}

/// Structural validation only, no filesystem access.
///
/// Checks that content patterns exist and parse as globs, and that theme
/// extensions are well-formed. Use this when the config describes files
/// that are virtual or not yet on disk.
///
/// # Example
///
/// ```
/// use weft_config::{ConfigValidator, SchemaValidator, WeftConfig};
///
/// let mut config = WeftConfig::default();
/// config.content = vec!["./src/**/*.html".to_string()];
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &WeftConfig) -> Result<()> {
        if config.content.is_empty() {
            return Err(ValidationError::NoContent.into());
        }

        for content_pattern in &config.content {
            pattern::check_syntax(content_pattern)?;
        }

        for (category, stack) in &config.theme.extend.font_family {
            if category.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "theme.extend.fontFamily".to_string(),
                    value: "\"\"".to_string(),
                    hint: "Font-family category names must be non-empty".to_string(),
                }
                .into());
            }

            if stack.is_empty() {
                return Err(ValidationError::EmptyFontStack {
                    category: category.clone(),
                }
                .into());
            }

            for font in stack {
                if font.trim().is_empty() {
                    return Err(ValidationError::InvalidValue {
                        field: format!("theme.extend.fontFamily.{category}"),
                        value: "\"\"".to_string(),
                        hint: "Font names must be non-empty".to_string(),
                    }
                    .into());
                }
            }
        }

        for category in config.theme.extend.other.keys() {
            if category.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "theme.extend".to_string(),
                    value: "\"\"".to_string(),
                    hint: "Theme token category names must be non-empty".to_string(),
                }
                .into());
            }
        }

        for plugin in &config.plugins {
            if plugin.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "plugins".to_string(),
                    value: "\"\"".to_string(),
                    hint: "Remove empty strings from the 'plugins' array".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use).
///
/// Runs schema validation, then checks that the literal base directory of
/// each content pattern exists under the project root, so a typo'd scan
/// root fails at load time instead of silently matching nothing.
///
/// # Example
///
/// ```no_run
/// use weft_config::{ConfigValidator, FsValidator, WeftConfig};
///
/// let mut config = WeftConfig::default();
/// config.content = vec!["./src/**/*.html".to_string()];
///
/// FsValidator::new(".").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator rooted at a project directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &WeftConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for content_pattern in &config.content {
            if let Some(base) = pattern::scan_root(content_pattern) {
                let path = self.root.join(&base);
                if !path.exists() {
                    return Err(ValidationError::ScanRootNotFound {
                        pattern: content_pattern.clone(),
                        path,
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation.
pub fn validate_schema(config: &WeftConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation.
pub fn validate_fs(config: &WeftConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
