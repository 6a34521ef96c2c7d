use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::language::Language;

const FREE_SERVER_URL: &str = "https://api-free.deepl.com";
const PRO_SERVER_URL: &str = "https://api.deepl.com";

/// Errors surfaced by a translation call.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("failed to reach translation service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation service rejected the API key")]
    Auth,

    #[error("translation quota exceeded")]
    QuotaExceeded,

    #[error("translation service is rate limiting requests")]
    RateLimited,

    #[error("translation request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("translation service returned no translations")]
    EmptyResponse,
}

/// Something that can translate text between two languages.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError>;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    source_lang: &'static str,
    target_lang: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// Client for the DeepL `/v2/translate` API.
pub struct DeeplClient {
    client: Client,
    server_url: String,
    api_key: SecretString,
}

impl DeeplClient {
    /// Creates a client, picking the free or pro server from the key unless
    /// `server_url` overrides it.
    pub fn new(api_key: SecretString, server_url: Option<String>) -> Self {
        let server_url = server_url
            .unwrap_or_else(|| default_server_url(api_key.expose_secret()).to_string());

        Self {
            client: Client::new(),
            server_url,
            api_key,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

/// Free-tier DeepL keys carry a `:fx` suffix and only work on the free host.
pub fn default_server_url(api_key: &str) -> &'static str {
    if api_key.ends_with(":fx") {
        FREE_SERVER_URL
    } else {
        PRO_SERVER_URL
    }
}

#[async_trait]
impl Translator for DeeplClient {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/v2/translate", self.server_url.trim_end_matches('/'));

        let body = TranslateRequest {
            text: [text],
            source_lang: source.deepl_source(),
            target_lang: target.deepl_target(),
        };

        debug!(%source, %target, chars = text.chars().count(), "sending translation request");

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("DeepL-Auth-Key {}", self.api_key.expose_secret()),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::FORBIDDEN => return Err(TranslateError::Auth),
            StatusCode::TOO_MANY_REQUESTS => return Err(TranslateError::RateLimited),
            s if s.as_u16() == 456 => return Err(TranslateError::QuotaExceeded),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(TranslateError::Status { status, body });
            }
            _ => {}
        }

        let parsed: TranslateResponse = response.json().await?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or(TranslateError::EmptyResponse)
    }
}
