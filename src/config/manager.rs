use secrecy::SecretString;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ocr::{CredentialsError, ServiceAccountKey};
use crate::paths;

pub const DEFAULT_DISCORD_TOKEN_ENV: &str = "DISCORD_TOKEN";
pub const DEFAULT_DEEPL_API_KEY_ENV: &str = "DEEPL_API_KEY";
pub const DEFAULT_VISION_CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS_JSON";

/// Configuration problems. Any of these stops the bot before it connects.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing required configuration: '{setting}'\n\n\
         Please provide it via:\n  \
         - Environment variable: export {env_var}=\"...\"\n  \
         - Config file: {}",
        config_hint()
    )]
    Missing {
        setting: &'static str,
        env_var: String,
    },

    #[error("Invalid OCR credentials: {0}")]
    InvalidCredentials(#[from] CredentialsError),

    #[error("Failed to read OCR credentials file {}: {source}", .path.display())]
    CredentialsFile { path: PathBuf, source: io::Error },

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

fn config_hint() -> String {
    paths::config_file().display().to_string()
}

/// `[discord]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordConfig {
    /// Bot token stored directly in config (not recommended).
    pub token: Option<String>,
    /// Environment variable holding the bot token.
    pub token_env: Option<String>,
}

/// `[deepl]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeeplConfig {
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    pub api_key_env: Option<String>,
    /// Overrides the free/pro host picked from the key.
    pub server_url: Option<String>,
}

/// `[vision]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisionConfig {
    /// Environment variable holding the service account JSON.
    pub credentials_env: Option<String>,
    /// Path to a service account key file, used when the env var is unset.
    pub credentials_file: Option<PathBuf>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `translatejp=debug`.
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/translatejp/config.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub deepl: DeeplConfig,
    #[serde(default)]
    pub vision: VisionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    Env(String),
    ConfigFile,
    CredentialsFile(PathBuf),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env(var) => write!(f, "${var}"),
            Self::ConfigFile => f.write_str("config file"),
            Self::CredentialsFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A secret value together with its origin.
#[derive(Debug, Clone)]
pub struct ResolvedSecret {
    pub value: SecretString,
    pub source: SettingSource,
}

/// Everything the bot needs to start, after merging env and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub discord_token: ResolvedSecret,
    pub deepl_api_key: ResolvedSecret,
    pub deepl_server_url: Option<String>,
    pub vision_key: ServiceAccountKey,
    pub vision_key_source: SettingSource,
    pub vision_endpoint: Option<String>,
}

/// Resolves required settings from the process environment and `config_file`.
pub fn resolve_config(config_file: &ConfigFile) -> Result<ResolvedConfig, ConfigError> {
    resolve_config_with(config_file, |name| std::env::var(name).ok())
}

/// Like [`resolve_config`], reading environment variables through `env`.
///
/// A non-empty environment variable wins over the config file value.
pub fn resolve_config_with<F>(config_file: &ConfigFile, env: F) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let discord_token = resolve_discord_token_with(config_file, &env)?;

    let deepl_api_key = resolve_secret(
        "deepl.api_key",
        config_file
            .deepl
            .api_key_env
            .as_deref()
            .unwrap_or(DEFAULT_DEEPL_API_KEY_ENV),
        config_file.deepl.api_key.as_deref(),
        &env,
    )?;

    let credentials_env = config_file
        .vision
        .credentials_env
        .as_deref()
        .unwrap_or(DEFAULT_VISION_CREDENTIALS_ENV);

    let (credentials_json, vision_key_source) = match non_empty(env(credentials_env)) {
        Some(json) => (json, SettingSource::Env(credentials_env.to_string())),
        None => {
            let path = config_file.vision.credentials_file.clone().ok_or_else(|| {
                ConfigError::Missing {
                    setting: "vision.credentials",
                    env_var: credentials_env.to_string(),
                }
            })?;
            let json = fs::read_to_string(&path).map_err(|source| {
                ConfigError::CredentialsFile {
                    path: path.clone(),
                    source,
                }
            })?;
            (json, SettingSource::CredentialsFile(path))
        }
    };

    let vision_key = ServiceAccountKey::from_json(&credentials_json)?;

    Ok(ResolvedConfig {
        discord_token,
        deepl_api_key,
        deepl_server_url: config_file.deepl.server_url.clone(),
        vision_key,
        vision_key_source,
        vision_endpoint: config_file.vision.endpoint.clone(),
    })
}

/// Resolves only the bot token, for commands that never touch OCR or DeepL.
pub fn resolve_discord_token(config_file: &ConfigFile) -> Result<ResolvedSecret, ConfigError> {
    resolve_discord_token_with(config_file, &|name: &str| std::env::var(name).ok())
}

fn resolve_discord_token_with<F>(config_file: &ConfigFile, env: &F) -> Result<ResolvedSecret, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    resolve_secret(
        "discord.token",
        config_file
            .discord
            .token_env
            .as_deref()
            .unwrap_or(DEFAULT_DISCORD_TOKEN_ENV),
        config_file.discord.token.as_deref(),
        env,
    )
}

fn resolve_secret<F>(
    setting: &'static str,
    env_var: &str,
    file_value: Option<&str>,
    env: &F,
) -> Result<ResolvedSecret, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = non_empty(env(env_var)) {
        return Ok(ResolvedSecret {
            value: SecretString::new(value),
            source: SettingSource::Env(env_var.to_string()),
        });
    }

    if let Some(value) = file_value.filter(|v| !v.is_empty()) {
        return Ok(ResolvedSecret {
            value: SecretString::new(value.to_string()),
            source: SettingSource::ConfigFile,
        });
    }

    Err(ConfigError::Missing {
        setting,
        env_var: env_var.to_string(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `$XDG_CONFIG_HOME/translatejp/config.toml`
    /// or `~/.config/translatejp/config.toml`.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_file(),
        }
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Read {
            path: self.config_path.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Loads the file, treating a missing file as an empty config.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile, ConfigError> {
        match self.load() {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(ConfigFile::default())
            }
            other => other,
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
