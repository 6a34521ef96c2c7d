use anyhow::Result;
use clap::Parser;

use translatejp::cli::commands::{configure, register, serve, translate};
use translatejp::cli::{Args, Command, exit_code};
use translatejp::config::ConfigManager;
use translatejp::logging;
use translatejp::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    let manager = args
        .config
        .map_or_else(ConfigManager::new, ConfigManager::with_path);
    let config_file = manager.load_or_default()?;

    logging::init(&config_file.logging);

    match args.command {
        None | Some(Command::Serve) => serve::run_serve(&config_file).await?,
        Some(Command::Register) => register::run_register(&config_file).await?,
        Some(Command::Translate { file, text, image }) => {
            let options = translate::TranslateOptions { file, text, image };
            translate::run_translate(&config_file, options).await?;
        }
        Some(Command::Configure { init, force }) => {
            let options = configure::ConfigureOptions { init, force };
            configure::run_configure(&manager, &config_file, &options)?;
        }
    }

    Ok(())
}
