use anyhow::{Result, bail};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use crate::bot::{
    CommandHandler, Invocation, Reply, Responder, ResponderError, build_pipeline,
};
use crate::config::{ConfigFile, resolve_config};
use crate::input::InputReader;

pub struct TranslateOptions {
    pub file: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
}

impl TranslateOptions {
    /// Flags win; otherwise the text comes from `file` or stdin.
    fn into_invocation(self) -> Result<Invocation> {
        if self.text.is_some() || self.image.is_some() {
            return Ok(Invocation {
                text: self.text,
                image_url: self.image,
            });
        }

        Ok(Invocation::text(InputReader::read(self.file.as_deref())?))
    }
}

/// Stands in for a chat platform: a spinner while deferred, stdout when final.
struct TerminalResponder {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalResponder {
    const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(bar) = spinner.take()
        {
            bar.finish_and_clear();
        }
    }
}

#[async_trait]
impl Responder for TerminalResponder {
    async fn acknowledge(&self) -> Result<(), ResponderError> {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} {msg}")
            .map_err(|e| ResponderError(e.to_string()))?;
        bar.set_style(style);
        bar.set_message("Translating...");
        bar.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(bar);
        }
        Ok(())
    }

    async fn finalize(&self, content: &str) -> Result<(), ResponderError> {
        self.clear_spinner();

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{content}")
            .and_then(|()| stdout.flush())
            .map_err(|e| ResponderError(e.to_string()))
    }
}

impl Drop for TerminalResponder {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}

pub async fn run_translate(config_file: &ConfigFile, options: TranslateOptions) -> Result<()> {
    let config = resolve_config(config_file)?;
    let invocation = options.into_invocation()?;

    let handler = CommandHandler::new(build_pipeline(&config)?);
    let responder = TerminalResponder::new();

    match handler.handle(&invocation, &responder).await {
        Reply::Failure => bail!("Translation failed (see log output for details)"),
        Reply::MissingInput | Reply::Translation(_) => Ok(()),
    }
}
