//! Command-line interface definition for the Weft CLI.
//!
//! Defines the CLI structure with clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `weft check` - Load and validate the project configuration
//! - `weft init` - Write a starter weft.toml
//! - `weft schema` - Print the JSON Schema for weft.toml

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Weft - configuration tooling for the Weft CSS utility-class generator
#[derive(Parser, Debug)]
#[command(
    name = "weft",
    version,
    about = "Configuration tooling for the Weft CSS utility-class generator",
    long_about = "Weft generates utility CSS from class names found in your source files.\n\
                  This CLI validates the weft.toml configuration that drives the generator,\n\
                  scaffolds a starter config, and exports its JSON Schema."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available Weft subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the project configuration
    ///
    /// Loads weft.toml (or the 'weft' field of package.json), checks every
    /// content pattern and theme token, and verifies that scan roots exist
    /// on disk.
    Check(CheckArgs),

    /// Create a starter weft.toml in the current directory
    Init(InitArgs),

    /// Print the JSON Schema for weft.toml
    ///
    /// Useful for editor integration and config linting.
    Schema,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the config file (default: discover weft.toml / package.json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip filesystem checks (validate structure only)
    ///
    /// With this flag the scan roots named by content patterns are not
    /// required to exist on disk.
    #[arg(long)]
    pub no_fs: bool,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing weft.toml
    #[arg(long)]
    pub force: bool,
}
