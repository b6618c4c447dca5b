//! Command-line interface components

pub mod args;
pub mod commands;

pub use args::Args;
pub use commands::{exit_code, resolve_settings, scan, Command};
