//! Structured logging setup.
//!
//! All log output goes to stderr so the local `translate` command can keep
//! stdout for the reply. `RUST_LOG` takes precedence over `[logging] level`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

pub const DEFAULT_LEVEL: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(config.level.as_deref().unwrap_or(DEFAULT_LEVEL))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let installed = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init(),
    };

    if let Err(e) = installed {
        tracing::debug!(error = %e, "global subscriber already installed, keeping it");
    }
}
