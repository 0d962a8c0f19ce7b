//! Build configuration for the Weft CSS utility-class generator.
//!
//! The generator scans project sources for utility class names and emits
//! CSS for the ones it finds. This crate owns the declarative configuration
//! that drives it: which files to scan (`content` glob patterns), which
//! theme tokens to add on top of the defaults (`theme.extend`), and the
//! reserved `plugins` list. The config is loaded once at startup, validated
//! eagerly, and never mutated.
//!
//! ```no_run
//! use weft_config::WeftConfig;
//!
//! let config = WeftConfig::load("weft.toml")?;
//! for pattern in &config.content {
//!     println!("scanning {pattern}");
//! }
//! # Ok::<(), weft_config::ConfigError>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod pattern;
pub mod theme;
pub mod validation;

// Re-export main types
pub use config::WeftConfig;
pub use error::{ConfigError, ParseError, Result, ValidationError};
pub use theme::{ThemeConfig, ThemeExtend};

// Re-export discovery and validation
pub use discovery::ConfigDiscovery;
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
