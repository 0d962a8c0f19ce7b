//! Weft CLI library.
//!
//! Exposed as a library so integration tests can exercise individual
//! pieces; the `weft` binary in `main.rs` is a thin dispatcher over these
//! modules.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;
