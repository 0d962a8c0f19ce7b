//! Terminal status messages for the Weft CLI.
//!
//! Output honors the global `--quiet` and `--no-color` flags: status
//! chatter (info/success/warning) is suppressed under quiet, and colors
//! are dropped when disabled or when stderr is not a terminal.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

static QUIET: AtomicBool = AtomicBool::new(false);
static COLOR: AtomicBool = AtomicBool::new(true);

/// Apply the global output flags.
///
/// Call once at program start, before any messages are printed.
pub fn configure(quiet: bool, no_color: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    COLOR.store(!no_color && should_use_color(), Ordering::Relaxed);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn color() -> bool {
    COLOR.load(Ordering::Relaxed)
}

/// Print a success message to stderr. Suppressed by `--quiet`.
pub fn success(message: &str) {
    if quiet() {
        return;
    }
    if color() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print an info message to stderr. Suppressed by `--quiet`.
pub fn info(message: &str) {
    if quiet() {
        return;
    }
    if color() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

/// Print a warning message to stderr. Suppressed by `--quiet`.
pub fn warning(message: &str) {
    if quiet() {
        return;
    }
    if color() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {message}");
    }
}

/// Print an error message to stderr. Printed even under `--quiet`.
pub fn error(message: &str) {
    if color() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {message}");
    }
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}
