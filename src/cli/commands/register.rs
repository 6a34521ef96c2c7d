use anyhow::Result;
use secrecy::ExposeSecret;

use crate::bot::discord;
use crate::config::{ConfigFile, resolve_discord_token};
use crate::ui::Style;

/// Registers the slash command over HTTP without starting the gateway.
pub async fn run_register(config_file: &ConfigFile) -> Result<()> {
    let token = resolve_discord_token(config_file)?;
    discord::register_with_token(token.value.expose_secret()).await?;

    println!(
        "{} /{} registered",
        Style::success("✓"),
        discord::COMMAND_NAME
    );
    Ok(())
}
