//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::config::ConfigError;

/// Maps a top-level error to a sysexits-style process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        exitcode::CONFIG
    } else {
        exitcode::SOFTWARE
    }
}
