//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations so the
//! bot finds its config in the same place on Linux servers and macOS laptops.

use std::path::PathBuf;

/// Returns the configuration directory for translatejp.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/translatejp` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/translatejp` otherwise
///
/// Falls back to the working directory when no home directory is known
/// (minimal containers often run without `$HOME`).
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("translatejp"),
        |xdg| PathBuf::from(xdg).join("translatejp"),
    )
}

/// Returns the default config file path.
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
