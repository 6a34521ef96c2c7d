//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Slash command registration.
pub mod register;

/// Bot server.
pub mod serve;

/// One-shot local translation.
pub mod translate;
