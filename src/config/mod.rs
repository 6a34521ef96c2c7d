mod manager;

pub use manager::{
    ConfigError, ConfigFile, ConfigManager, DEFAULT_DEEPL_API_KEY_ENV, DEFAULT_DISCORD_TOKEN_ENV,
    DEFAULT_VISION_CREDENTIALS_ENV, DeeplConfig, DiscordConfig, LogFormat, LoggingConfig,
    ResolvedConfig, ResolvedSecret, SettingSource, VisionConfig, resolve_config,
    resolve_config_with, resolve_discord_token,
};
