use anyhow::Result;
use secrecy::ExposeSecret;

use crate::config::{ConfigFile, ConfigManager, ResolvedSecret, resolve_config};
use crate::fs::atomic_write;
use crate::translation::default_server_url;
use crate::ui::Style;

const STARTER_CONFIG: &str = r#"# translatejp configuration
#
# Secrets are read from environment variables. The variable names below are
# the defaults; change them here if your deployment uses different names.

[discord]
token_env = "DISCORD_TOKEN"

[deepl]
api_key_env = "DEEPL_API_KEY"
# Picked from the key (":fx" suffix means the free API) unless set:
# server_url = "https://api-free.deepl.com"

[vision]
credentials_env = "GOOGLE_APPLICATION_CREDENTIALS_JSON"
# Used when the variable above is unset:
# credentials_file = "/etc/translatejp/service-account.json"

[logging]
level = "info"
format = "pretty"
"#;

pub struct ConfigureOptions {
    pub init: bool,
    pub force: bool,
}

pub fn run_configure(
    manager: &ConfigManager,
    config_file: &ConfigFile,
    options: &ConfigureOptions,
) -> Result<()> {
    if options.init {
        atomic_write(manager.config_path(), STARTER_CONFIG, options.force)?;
        println!(
            "{} Wrote {}",
            Style::success("✓"),
            manager.config_path().display()
        );
        return Ok(());
    }

    show_config(manager, config_file)
}

fn show_config(manager: &ConfigManager, config_file: &ConfigFile) -> Result<()> {
    let path = manager.config_path();
    let exists = path.exists();

    println!("{}", Style::header("Configuration"));
    println!(
        "  {:14} {} {}",
        Style::label("config file"),
        Style::value(path.display()),
        if exists {
            String::new()
        } else {
            Style::hint("(not found, using defaults)")
        }
    );

    let config = resolve_config(config_file)?;
    let deepl_server = config.deepl_server_url.clone().unwrap_or_else(|| {
        default_server_url(config.deepl_api_key.value.expose_secret()).to_string()
    });

    print_secret("discord.token", &config.discord_token);
    print_secret("deepl.api_key", &config.deepl_api_key);
    println!(
        "  {:14} {}",
        Style::label("deepl.server"),
        Style::value(deepl_server)
    );
    println!(
        "  {:14} {} {}",
        Style::label("vision.account"),
        Style::value(&config.vision_key.client_email),
        Style::secondary(format!("({})", config.vision_key_source))
    );
    println!(
        "  {:14} {}",
        Style::label("logging.level"),
        Style::value(config_file.logging.level.as_deref().unwrap_or("info"))
    );

    Ok(())
}

fn print_secret(label: &str, secret: &ResolvedSecret) {
    println!(
        "  {:14} {} {}",
        Style::label(label),
        Style::value(mask(secret.value.expose_secret())),
        Style::secondary(format!("({})", secret.source))
    );
}

/// Shows only the last four characters of long secrets.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "********".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("********{tail}")
}
