use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "translatejp")]
#[command(about = "Discord bot that translates Japanese text and images to English")]
#[command(version)]
pub struct Args {
    /// Path to config.toml (defaults to ~/.config/translatejp/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to Discord and serve /translatejp (default)
    Serve,
    /// Register the /translatejp slash command and exit
    Register,
    /// Translate once from the terminal, the same way the bot would
    Translate {
        /// File to translate (reads from stdin if no input is given)
        #[arg(conflicts_with_all = ["text", "image"])]
        file: Option<String>,

        /// Japanese text to translate
        #[arg(short = 't', long)]
        text: Option<String>,

        /// URL of an image containing Japanese text
        #[arg(short = 'i', long)]
        image: Option<String>,
    },
    /// Show resolved configuration, or write a starter config file
    Configure {
        /// Write a starter config.toml
        #[arg(long)]
        init: bool,

        /// Overwrite an existing config file with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}
