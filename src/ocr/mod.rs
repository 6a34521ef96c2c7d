mod client;
mod credentials;

pub use client::{DEFAULT_VISION_ENDPOINT, OcrError, TextDetector, VisionClient};
pub use credentials::{
    AccessTokenProvider, CredentialsError, ServiceAccountKey, ServiceAccountTokenProvider,
    VISION_SCOPE,
};
