//! Platform-independent handling of one `/translatejp` invocation.
//!
//! Each invocation runs `acknowledge → resolve text → translate → finalize`
//! in order and ends with exactly one final reply. Downstream errors are
//! logged here and turned into [`Reply::Failure`]; nothing escapes to the
//! caller except a failed platform call, which is logged as well.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, warn};

use super::reply::Reply;
use crate::ocr::{OcrError, TextDetector};
use crate::translation::{Language, TranslateError, Translator};

pub const SOURCE_LANGUAGE: Language = Language::Japanese;
pub const TARGET_LANGUAGE: Language = Language::English;

/// The two optional inputs of the command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub text: Option<String>,
    pub image_url: Option<String>,
}

/// Where the Japanese text for an invocation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    Text(&'a str),
    Image(&'a str),
    Missing,
}

impl Invocation {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image_url: None,
        }
    }

    pub fn image(image_url: impl Into<String>) -> Self {
        Self {
            text: None,
            image_url: Some(image_url.into()),
        }
    }

    /// Picks the text source.
    ///
    /// Non-empty text always wins, even when an image is attached and would
    /// read differently. An empty string counts as no text.
    pub fn source(&self) -> Source<'_> {
        match (self.text.as_deref(), self.image_url.as_deref()) {
            (Some(text), _) if !text.is_empty() => Source::Text(text),
            (_, Some(url)) if !url.is_empty() => Source::Image(url),
            _ => Source::Missing,
        }
    }
}

/// A downstream failure, kept typed so logs can tell the categories apart.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Ocr(#[from] OcrError),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}

impl HandlerError {
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Ocr(_) => "ocr",
            Self::Translate(_) => "translation",
        }
    }
}

/// Failure talking to the chat platform itself.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ResponderError(pub String);

/// The deferred-reply surface of a chat platform.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Sends the provisional, private acknowledgment.
    async fn acknowledge(&self) -> Result<(), ResponderError>;

    /// Replaces the acknowledgment with the final content.
    async fn finalize(&self, content: &str) -> Result<(), ResponderError>;
}

/// Resolves source text and translates it.
#[derive(Clone)]
pub struct Pipeline {
    detector: Arc<dyn TextDetector>,
    translator: Arc<dyn Translator>,
}

impl Pipeline {
    pub fn new(detector: Arc<dyn TextDetector>, translator: Arc<dyn Translator>) -> Self {
        Self {
            detector,
            translator,
        }
    }

    /// Returns the Japanese text to translate, or `None` when there is none.
    pub async fn resolve(&self, invocation: &Invocation) -> Result<Option<String>, HandlerError> {
        match invocation.source() {
            Source::Text(text) => Ok(Some(text.to_string())),
            Source::Image(url) => Ok(self
                .detector
                .detect_text(url)
                .await?
                .filter(|text| !text.is_empty())),
            Source::Missing => Ok(None),
        }
    }

    /// Runs the invocation to its final reply. Never fails.
    pub async fn run(&self, invocation: &Invocation) -> Reply {
        match self.try_run(invocation).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(
                    category = e.category(),
                    error = %e,
                    details = ?e,
                    "translation request failed"
                );
                Reply::Failure
            }
        }
    }

    async fn try_run(&self, invocation: &Invocation) -> Result<Reply, HandlerError> {
        let Some(source_text) = self.resolve(invocation).await? else {
            info!(
                has_text = invocation.text.is_some(),
                has_image = invocation.image_url.is_some(),
                "no source text, prompting user"
            );
            return Ok(Reply::MissingInput);
        };

        let translated = self
            .translator
            .translate(&source_text, SOURCE_LANGUAGE, TARGET_LANGUAGE)
            .await?;

        info!(
            source_chars = source_text.chars().count(),
            translated_chars = translated.chars().count(),
            "translation complete"
        );

        Ok(Reply::Translation(translated))
    }
}

/// Drives one invocation through the acknowledge-then-edit reply pattern.
#[derive(Clone)]
pub struct CommandHandler {
    pipeline: Pipeline,
}

impl CommandHandler {
    pub const fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Handles `invocation`, finalizing through `responder` exactly once.
    ///
    /// Returns the reply that was produced. If the acknowledgment fails the
    /// platform has no deferred response to edit, so nothing else is sent.
    pub async fn handle(&self, invocation: &Invocation, responder: &dyn Responder) -> Reply {
        if let Err(e) = responder.acknowledge().await {
            error!(error = %e, "failed to acknowledge command");
            return Reply::Failure;
        }

        let reply = self.pipeline.run(invocation).await;

        if let Err(e) = responder.finalize(&reply.text()).await {
            warn!(error = %e, "failed to send final reply");
        }

        reply
    }
}
