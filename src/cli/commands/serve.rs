use anyhow::Result;
use tracing::info;

use crate::bot::{CommandHandler, build_pipeline, discord};
use crate::config::{ConfigFile, resolve_config};

/// Runs the bot until the gateway closes or Ctrl+C.
///
/// Every required setting is resolved before anything connects, so a
/// missing secret stops the process without touching the network.
pub async fn run_serve(config_file: &ConfigFile) -> Result<()> {
    let config = resolve_config(config_file)?;
    let handler = CommandHandler::new(build_pipeline(&config)?);

    info!(
        ocr_account = %config.vision_key.client_email,
        deepl_server = config.deepl_server_url.as_deref().unwrap_or("auto"),
        "starting translatejp bot"
    );

    discord::run_bot(&config, handler).await
}
