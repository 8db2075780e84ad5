//! HTTP client for a remote document-OCR endpoint.
//!
//! The endpoint accepts a base64-encoded page image and returns a
//! [`ProviderPage`]-shaped JSON payload: recognized text plus optional
//! confidence, quality score, transforms, tables and entity mentions.

use crate::{OcrError, OcrProvider, PageInput, ProviderPage};
use base64::Engine;
use log::debug;
use serde::Serialize;
use std::env;
use std::time::Duration;

/// Configuration for the remote OCR provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrProviderConfig {
    /// Endpoint URL accepting recognition requests
    pub endpoint: String,
    /// Bearer token, when the endpoint requires one
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OcrProviderConfig {
    /// Create configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SCANDOC_OCR_ENDPOINT`: endpoint URL (required)
    /// - `SCANDOC_OCR_API_KEY`: bearer token (optional)
    /// - `SCANDOC_OCR_TIMEOUT`: request timeout in seconds (default: 120)
    ///
    /// # Errors
    /// Returns [`OcrError::NotConfigured`] when the endpoint is not set.
    pub fn from_env() -> Result<Self, OcrError> {
        let endpoint = env::var("SCANDOC_OCR_ENDPOINT").map_err(|_| {
            OcrError::NotConfigured("SCANDOC_OCR_ENDPOINT environment variable not set".to_string())
        })?;

        let api_key = env::var("SCANDOC_OCR_API_KEY").ok();

        let timeout_secs = env::var("SCANDOC_OCR_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(120);

        Ok(Self {
            endpoint,
            api_key,
            timeout_secs,
        })
    }
}

/// Recognition request body posted to the endpoint.
#[derive(Debug, Clone, Serialize)]
struct RecognizeRequest {
    /// Base64-encoded page image
    content: String,
    /// Mime type of the encoded bytes
    #[serde(rename = "mimeType")]
    mime_type: String,
}

/// Remote OCR provider over HTTP.
#[derive(Debug, Clone)]
pub struct HttpOcrProvider {
    config: OcrProviderConfig,
    http_client: reqwest::Client,
}

impl HttpOcrProvider {
    /// Create a provider from explicit configuration.
    ///
    /// # Errors
    /// Returns an [`OcrError`] when the HTTP client cannot be built.
    pub fn new(config: OcrProviderConfig) -> Result<Self, OcrError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a provider from environment variables.
    ///
    /// # Errors
    /// Returns [`OcrError::NotConfigured`] when the endpoint is not set.
    pub fn from_env() -> Result<Self, OcrError> {
        Self::new(OcrProviderConfig::from_env()?)
    }
}

impl OcrProvider for HttpOcrProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn recognize_page(&self, input: &PageInput) -> Result<ProviderPage, OcrError> {
        let (bytes, mime_type) = match input {
            PageInput::Image { bytes, mime_type } => (bytes, mime_type.as_str()),
            PageInput::Text(_) => {
                return Err(OcrError::UnsupportedMedia(
                    "http provider expects image input, got text".to_string(),
                ))
            }
        };

        let request = RecognizeRequest {
            content: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type: mime_type.to_string(),
        };

        debug!(
            "posting {} bytes ({mime_type}) to {}",
            bytes.len(),
            self.config.endpoint
        );

        let mut builder = self.http_client.post(&self.config.endpoint).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.header("Authorization", format!("Bearer {key}"));
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(OcrError::ProviderError(format!(
                "endpoint returned {status}: {body}"
            )));
        }

        let page: ProviderPage = serde_json::from_str(&body)?;
        Ok(page)
    }
}
