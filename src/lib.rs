//! # translatejp - Japanese to English Discord bot
//!
//! `translatejp` serves a single `/translatejp` slash command. Users pass
//! Japanese text, or attach a screenshot which is read with Google Cloud
//! Vision OCR, and get a private DeepL translation back.
//!
//! ## Quick Start
//!
//! ```bash
//! export DISCORD_TOKEN=...
//! export DEEPL_API_KEY=...
//! export GOOGLE_APPLICATION_CREDENTIALS_JSON="$(cat service-account.json)"
//!
//! # Run the bot
//! translatejp
//!
//! # Try the pipeline locally
//! translatejp translate --text "こんにちは"
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/translatejp/config.toml`
//! (`translatejp configure --init` writes a starter file):
//!
//! ```toml
//! [deepl]
//! api_key_env = "DEEPL_API_KEY"
//!
//! [vision]
//! credentials_file = "/etc/translatejp/service-account.json"
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

/// Command handling and the Discord adapter.
pub mod bot;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and secret resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Structured logging setup.
pub mod logging;

/// OCR client for Google Cloud Vision.
pub mod ocr;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client for DeepL.
pub mod translation;

/// Terminal styling.
pub mod ui;
