//! Error types for configuration loading and validation.
//!
//! Errors split into two kinds: [`ParseError`] for files that are not
//! well-formed data, and [`ValidationError`] for well-formed configs that
//! break an invariant. Both abort the load; there is no partial application.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Top-level error returned by config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is not a structurally valid data object
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The config is well-formed but violates an invariant
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error while reading the config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The config file could not be read as a data object.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Config file doesn't exist at the given path
    #[error("Config file not found: {}\n\nHint: Run 'weft init' or specify --config <path>", .0.display())]
    NotFound(PathBuf),

    /// No config file in any conventional location under the project root
    #[error("No weft.toml or package.json 'weft' field found in {}\n\nHint: Run 'weft init' to create a starter weft.toml", .root.display())]
    NoConfigFound { root: PathBuf },

    /// Config file has invalid TOML syntax
    #[error("Invalid TOML in {}: {source}\n\nHint: Check for unclosed strings or misplaced tables", .path.display())]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    /// Config file has invalid JSON syntax
    #[error("Invalid JSON in {}: {source}\n\nHint: Use a JSON validator to check syntax", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// package.json exists but carries no usable `weft` field
    #[error("package.json has no 'weft' field: {}\n\nHint: Add a \"weft\" object or create weft.toml", .0.display())]
    MissingEmbed(PathBuf),
}

/// The config parsed but violates an invariant.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// `content` is missing or empty
    #[error("no content patterns specified\n\nHint: Add at least one glob to 'content', e.g. \"./src/**/*.html\"")]
    NoContent,

    /// A content pattern is empty or not a valid glob
    #[error("invalid content pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A font-family category lists no fonts
    #[error("font stack for '{category}' is empty\n\nHint: List at least one font name in the fallback order")]
    EmptyFontStack { category: String },

    /// The literal base directory of a content pattern doesn't exist
    #[error("scan root not found for pattern '{pattern}': {}\n\nHint: Check the directory part of the glob for typos", .path.display())]
    ScanRootNotFound { pattern: String, path: PathBuf },

    /// Invalid value for a configuration field
    #[error("invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },
}

impl ConfigError {
    /// Whether this error came from malformed input rather than an
    /// invariant violation.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConfigError::Parse(_))
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, ConfigError::Validation(_))
    }
}
