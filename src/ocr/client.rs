use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::credentials::AccessTokenProvider;

pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com";

/// Errors surfaced by an OCR call.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("failed to authenticate with the OCR service: {0}")]
    Auth(String),

    #[error("failed to reach OCR service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OCR request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("OCR service could not process the image (code {code}): {message}")]
    Api { code: i32, message: String },
}

/// Something that can pull text out of an image.
#[async_trait]
pub trait TextDetector: Send + Sync {
    /// Returns the full text found in the image at `image_url`, or `None`
    /// when the image contains no text.
    async fn detect_text(&self, image_url: &str) -> Result<Option<String>, OcrError>;
}

#[derive(Debug, Serialize)]
struct AnnotateRequest<'a> {
    requests: [AnnotateImageRequest<'a>; 1],
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest<'a> {
    image: Image<'a>,
    features: [Feature; 1],
}

#[derive(Debug, Serialize)]
struct Image<'a> {
    source: ImageSource<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageSource<'a> {
    image_uri: &'a str,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    full_text_annotation: Option<TextAnnotation>,
    error: Option<RpcStatus>,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct RpcStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

/// Client for Google Cloud Vision `images:annotate` text detection.
pub struct VisionClient {
    client: Client,
    endpoint: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl VisionClient {
    pub fn new(tokens: Arc<dyn AccessTokenProvider>, endpoint: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_VISION_ENDPOINT.to_string()),
            tokens,
        }
    }
}

#[async_trait]
impl TextDetector for VisionClient {
    async fn detect_text(&self, image_url: &str) -> Result<Option<String>, OcrError> {
        let url = format!(
            "{}/v1/images:annotate",
            self.endpoint.trim_end_matches('/')
        );
        let token = self.tokens.access_token().await?;

        let body = AnnotateRequest {
            requests: [AnnotateImageRequest {
                image: Image {
                    source: ImageSource {
                        image_uri: image_url,
                    },
                },
                features: [Feature {
                    kind: "TEXT_DETECTION",
                }],
            }],
        };

        debug!(image_url, "sending text detection request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Status { status, body });
        }

        let parsed: AnnotateResponse = response.json().await?;
        let Some(image) = parsed.responses.into_iter().next() else {
            return Ok(None);
        };

        if let Some(error) = image.error
            && error.code != 0
        {
            return Err(OcrError::Api {
                code: error.code,
                message: error.message,
            });
        }

        Ok(image
            .full_text_annotation
            .map(|annotation| annotation.text)
            .filter(|text| !text.is_empty()))
    }
}
