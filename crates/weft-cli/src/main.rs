//! Weft CLI - configuration tooling for the Weft utility-class generator.
//!
//! Handles command-line argument parsing, logging initialization, and
//! command dispatch.

use clap::Parser;
use miette::Result;
use weft_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::configure(args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
        cli::Command::Schema => commands::schema_execute(),
    };

    // Convert CLI errors to miette diagnostics for readable reporting
    result.map_err(error::cli_error_to_miette)
}
