//! Discord adapter for serenity.
//!
//! Registers the `/translatejp` slash command and routes its interactions
//! into [`CommandHandler`].

use std::sync::Arc;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serenity::all::{
    Command, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse, EventHandler, GatewayIntents, Http, Interaction, Ready,
    ResolvedOption, ResolvedValue,
};
use serenity::Client;
use tracing::{debug, error, info};

use super::handler::{CommandHandler, Invocation, Responder, ResponderError};
use crate::config::ResolvedConfig;

pub const COMMAND_NAME: &str = "translatejp";
pub const TEXT_OPTION: &str = "text";
pub const IMAGE_OPTION: &str = "image";

/// The slash command definition sent to Discord.
pub fn command_definition() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Translate Japanese text or image to English")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, TEXT_OPTION, "Japanese text"),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Attachment,
                IMAGE_OPTION,
                "Image with Japanese text",
            ),
        )
}

/// Overwrites the bot's global commands with the current definition.
///
/// Discord replaces the whole set, so calling this on every start is safe.
pub async fn register_commands(http: &Arc<Http>) -> serenity::Result<()> {
    let registered = Command::set_global_commands(http, vec![command_definition()]).await?;
    debug!(count = registered.len(), "global commands set");
    Ok(())
}

/// Registers commands using only the bot token, without a gateway session.
pub async fn register_with_token(token: &str) -> Result<()> {
    let http = Arc::new(Http::new(token));
    let app = http
        .get_current_application_info()
        .await
        .context("Failed to look up the Discord application")?;
    http.set_application_id(app.id);

    register_commands(&http)
        .await
        .context("Failed to register slash command")?;

    info!(application_id = %app.id, command = COMMAND_NAME, "slash command registered");
    Ok(())
}

/// Builds an [`Invocation`] from the command's resolved options.
pub fn invocation_from_options(options: &[ResolvedOption<'_>]) -> Invocation {
    let mut invocation = Invocation::default();

    for option in options {
        match (option.name, &option.value) {
            (TEXT_OPTION, ResolvedValue::String(text)) => {
                invocation.text = Some((*text).to_string());
            }
            (IMAGE_OPTION, ResolvedValue::Attachment(attachment)) => {
                invocation.image_url = Some(attachment.url.clone());
            }
            (name, _) => debug!(option = name, "ignoring unexpected command option"),
        }
    }

    invocation
}

/// Answers one interaction through Discord's deferred-response API.
struct InteractionResponder<'a> {
    http: Arc<Http>,
    command: &'a CommandInteraction,
}

#[async_trait]
impl Responder for InteractionResponder<'_> {
    async fn acknowledge(&self) -> Result<(), ResponderError> {
        self.command
            .defer_ephemeral(&self.http)
            .await
            .map_err(|e| ResponderError(e.to_string()))
    }

    async fn finalize(&self, content: &str) -> Result<(), ResponderError> {
        self.command
            .edit_response(&self.http, EditInteractionResponse::new().content(content))
            .await
            .map(|_| ())
            .map_err(|e| ResponderError(e.to_string()))
    }
}

/// Handler for Discord gateway events.
pub struct DiscordHandler {
    handler: CommandHandler,
}

impl DiscordHandler {
    pub const fn new(handler: CommandHandler) -> Self {
        Self { handler }
    }

    /// Slash commands need no privileged intents.
    pub const fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_name = %ready.user.name,
            guilds = ready.guilds.len(),
            "logged in to discord"
        );

        match register_commands(&ctx.http).await {
            Ok(()) => info!(command = COMMAND_NAME, "slash command registered"),
            Err(e) => error!(error = %e, "failed to register slash command"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if command.data.name != COMMAND_NAME {
            return;
        }

        let invocation = invocation_from_options(&command.data.options());
        info!(
            interaction_id = %command.id,
            user_id = %command.user.id,
            has_text = invocation.text.is_some(),
            has_image = invocation.image_url.is_some(),
            "received translate command"
        );

        let responder = InteractionResponder {
            http: ctx.http.clone(),
            command: &command,
        };
        self.handler.handle(&invocation, &responder).await;
    }
}

/// Connects to the gateway and serves commands until shut down.
pub async fn run_bot(config: &ResolvedConfig, handler: CommandHandler) -> Result<()> {
    let mut client = Client::builder(
        config.discord_token.value.expose_secret(),
        DiscordHandler::intents(),
    )
    .event_handler(DiscordHandler::new(handler))
    .await
    .context("Failed to create Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutting down");
            shard_manager.shutdown_all().await;
        }
    });

    client
        .start()
        .await
        .context("Discord gateway connection failed")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition_shape() {
        let json = serde_json::to_value(command_definition()).unwrap();

        assert_eq!(json["name"], "translatejp");
        assert_eq!(
            json["description"],
            "Translate Japanese text or image to English"
        );

        let options = json["options"].as_array().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0]["name"], "text");
        assert_eq!(options[0]["type"], 3);
        assert_eq!(options[1]["name"], "image");
        assert_eq!(options[1]["type"], 11);
    }

    #[test]
    fn test_invocation_from_no_options() {
        assert_eq!(invocation_from_options(&[]), Invocation::default());
    }

    #[test]
    fn test_intents_are_unprivileged() {
        assert_eq!(DiscordHandler::intents(), GatewayIntents::GUILDS);
    }
}
