//! The `/translatejp` command: core handling plus the Discord adapter.

pub mod discord;
mod handler;
mod reply;

use std::sync::Arc;

pub use handler::{
    CommandHandler, HandlerError, Invocation, Pipeline, Responder, ResponderError,
    SOURCE_LANGUAGE, Source, TARGET_LANGUAGE,
};
pub use reply::{
    FAILURE_TEXT, MAX_MESSAGE_CHARS, MISSING_INPUT_TEXT, Reply, TRANSLATION_LABEL,
    truncate_message,
};

use crate::config::{ConfigError, ResolvedConfig};
use crate::ocr::{ServiceAccountTokenProvider, VisionClient};
use crate::translation::DeeplClient;

/// Builds the OCR and translation clients once, for reuse by every invocation.
pub fn build_pipeline(config: &ResolvedConfig) -> Result<Pipeline, ConfigError> {
    let tokens = ServiceAccountTokenProvider::new(config.vision_key.clone())?;
    let detector = VisionClient::new(Arc::new(tokens), config.vision_endpoint.clone());
    let translator = DeeplClient::new(
        config.deepl_api_key.value.clone(),
        config.deepl_server_url.clone(),
    );

    Ok(Pipeline::new(Arc::new(detector), Arc::new(translator)))
}
