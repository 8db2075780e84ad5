//! OCR provider abstraction for scandoc.
//!
//! Providers consume one page at a time and return a [`ProviderPage`]: the
//! raw text plus whatever structural metadata the provider reports
//! (confidence, image quality score, page transforms, table grids, entity
//! mentions). The pipeline normalizes and aggregates those signals; this
//! crate only defines the wire shapes and the clients.
//!
//! Two providers ship with the crate:
//! - [`HttpOcrProvider`]: posts base64-encoded page images to a remote
//!   document-OCR endpoint.
//! - [`PlainTextProvider`]: accepts pre-extracted page text and synthesizes
//!   a deterministic confidence; used for text inputs and tests.

mod http;
mod text;

pub use http::{HttpOcrProvider, OcrProviderConfig};
pub use text::{deterministic_confidence, PlainTextProvider};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OCR provider errors.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Provider endpoint returned a non-success response
    #[error("Provider returned an error: {0}")]
    ProviderError(String),

    /// Input media type the provider cannot handle
    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    /// Provider is missing required configuration
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// HTTP transport failure
    #[error("HTTP transport error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Provider response could not be decoded
    #[error("Failed to decode provider response: {0}")]
    DecodeError(#[from] serde_json::Error),
}

/// One page of input handed to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageInput {
    /// Encoded page image bytes with their mime type
    Image {
        /// Encoded image bytes (PNG/JPEG/WebP/TIFF)
        bytes: Vec<u8>,
        /// Mime type of the encoded bytes
        mime_type: String,
    },
    /// Pre-extracted page text (no OCR needed)
    Text(String),
}

/// Affine page transform reported by the provider.
///
/// `rows[0][1]` carries the rotation shear component; an absolute value
/// above the skew threshold marks the page as skewed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTransform {
    /// Transform matrix rows
    pub rows: Vec<Vec<f64>>,
}

impl PageTransform {
    /// Off-diagonal rotation component, when the matrix carries one.
    #[inline]
    #[must_use = "returns the rotation component without using it"]
    pub fn rotation_component(&self) -> Option<f64> {
        self.rows.first().and_then(|row| row.get(1)).copied()
    }
}

/// Table grid reported by the provider for a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderTable {
    /// Provider-assigned table name
    pub name: String,
    /// Detection confidence (0-100)
    pub confidence: u8,
    /// Grid rows, header row first
    pub rows: Vec<Vec<String>>,
}

/// Entity mention reported by the provider, with the page indices it
/// references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderEntity {
    /// Entity type
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Mention text
    #[serde(rename = "mentionText")]
    pub mention_text: String,
    /// Extraction confidence as a fraction (0.0-1.0), when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// 0-based page indices this mention references
    #[serde(rename = "pageRefs", default)]
    pub page_refs: Vec<usize>,
}

/// Raw per-page provider output consumed by the analysis pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderPage {
    /// Recognized text
    pub text: String,
    /// Provider-reported confidence; 0.0-1.0 or 0-100 depending on the
    /// provider, normalize with [`normalize_confidence`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Image quality score in 0.0-1.0, when reported
    #[serde(rename = "qualityScore", skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,
    /// Page transforms, when reported
    #[serde(default)]
    pub transforms: Vec<PageTransform>,
    /// Provider-detected tables, when reported
    #[serde(default)]
    pub tables: Vec<ProviderTable>,
    /// Entity mentions, with page references
    #[serde(default)]
    pub entities: Vec<ProviderEntity>,
}

/// Normalize a provider confidence to the 0-100 range.
///
/// Providers report either a fraction in 0.0-1.0 or a percentage in 0-100;
/// values at or below 1.0 are interpreted as fractions.
#[inline]
#[must_use = "returns the normalized confidence without using it"]
pub fn normalize_confidence(raw: f64) -> f64 {
    if raw.is_nan() || raw < 0.0 {
        return 0.0;
    }
    let percent = if raw <= 1.0 { raw * 100.0 } else { raw };
    percent.min(100.0)
}

/// An OCR provider: recognizes one page at a time.
///
/// Implementations are caller-owned values injected into the pipeline; no
/// shared module-level state. Calls are at-most-once per page: the pipeline
/// never retries a failed call.
#[allow(async_fn_in_trait)]
pub trait OcrProvider {
    /// Short provider name for logging.
    fn name(&self) -> &str;

    /// Recognize a single page.
    ///
    /// # Errors
    /// Returns an [`OcrError`] when the input media is unsupported or the
    /// provider call fails; any failure aborts the whole document run.
    async fn recognize_page(&self, input: &PageInput) -> Result<ProviderPage, OcrError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_confidence_fraction_vs_percent() {
        assert_eq!(normalize_confidence(0.87), 87.0);
        assert_eq!(normalize_confidence(1.0), 100.0);
        assert_eq!(normalize_confidence(87.0), 87.0);
        assert_eq!(normalize_confidence(250.0), 100.0);
        assert_eq!(normalize_confidence(-3.0), 0.0);
        assert_eq!(normalize_confidence(f64::NAN), 0.0);
    }

    #[test]
    fn test_rotation_component() {
        let transform = PageTransform {
            rows: vec![vec![0.99, -0.15, 0.0], vec![0.15, 0.99, 0.0]],
        };
        assert_eq!(transform.rotation_component(), Some(-0.15));

        let empty = PageTransform::default();
        assert_eq!(empty.rotation_component(), None);
    }

    #[test]
    fn test_provider_page_deserializes_sparse_payload() {
        // Optional metadata may be entirely absent from the wire payload.
        let page: ProviderPage = serde_json::from_str(r#"{"text": "olá"}"#).unwrap();
        assert_eq!(page.text, "olá");
        assert!(page.confidence.is_none());
        assert!(page.transforms.is_empty());
        assert!(page.tables.is_empty());
        assert!(page.entities.is_empty());
    }

    #[test]
    fn test_provider_entity_wire_names() {
        let entity: ProviderEntity = serde_json::from_str(
            r#"{"type": "date", "mentionText": "01/02/2024", "confidence": 0.9, "pageRefs": [0]}"#,
        )
        .unwrap();
        assert_eq!(entity.entity_type, "date");
        assert_eq!(entity.mention_text, "01/02/2024");
        assert_eq!(entity.page_refs, vec![0]);
    }
}
