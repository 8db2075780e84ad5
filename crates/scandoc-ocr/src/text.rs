//! Deterministic provider for pre-extracted page text.

use crate::{OcrError, OcrProvider, PageInput, ProviderPage};

/// Deterministic confidence for text that carries no provider score.
///
/// Longer recognized text correlates with a cleaner scan, so the score
/// grows slowly with length: 75 plus one point per 120 characters, capped
/// at 95. Text that is empty after trimming scores 50.
#[must_use = "returns the synthesized confidence without using it"]
pub fn deterministic_confidence(text: &str) -> u8 {
    if text.trim().is_empty() {
        return 50;
    }
    let bonus = (text.chars().count() / 120) as u64;
    (75 + bonus.min(20)) as u8
}

/// Provider for inputs that are already text.
///
/// Performs no recognition: [`PageInput::Text`] passes through with a
/// deterministic confidence, image inputs are rejected. Useful for feeding
/// pre-OCR'd text through the analysis pipeline and as the test provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextProvider;

impl PlainTextProvider {
    /// Create a plain-text provider.
    #[inline]
    #[must_use = "creates a provider without using it"]
    pub const fn new() -> Self {
        Self
    }
}

impl OcrProvider for PlainTextProvider {
    fn name(&self) -> &str {
        "plain-text"
    }

    async fn recognize_page(&self, input: &PageInput) -> Result<ProviderPage, OcrError> {
        match input {
            PageInput::Text(text) => Ok(ProviderPage {
                text: text.clone(),
                confidence: Some(f64::from(deterministic_confidence(text))),
                ..ProviderPage::default()
            }),
            PageInput::Image { mime_type, .. } => Err(OcrError::UnsupportedMedia(format!(
                "plain-text provider cannot recognize images ({mime_type})"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_confidence_is_stable_and_bounded() {
        assert_eq!(deterministic_confidence(""), 50);
        assert_eq!(deterministic_confidence("   \n "), 50);
        assert_eq!(deterministic_confidence("curto"), 75);

        let long = "x".repeat(500);
        assert_eq!(deterministic_confidence(&long), 79);
        assert_eq!(deterministic_confidence(&long), 79);

        let very_long = "x".repeat(100_000);
        assert_eq!(deterministic_confidence(&very_long), 95);
    }

    #[tokio::test]
    async fn test_text_passthrough() {
        let provider = PlainTextProvider::new();
        let page = provider
            .recognize_page(&PageInput::Text("conteúdo da página".to_string()))
            .await
            .unwrap();
        assert_eq!(page.text, "conteúdo da página");
        assert_eq!(page.confidence, Some(75.0));
    }

    #[tokio::test]
    async fn test_image_rejected() {
        let provider = PlainTextProvider::new();
        let result = provider
            .recognize_page(&PageInput::Image {
                bytes: vec![0x89, 0x50],
                mime_type: "image/png".to_string(),
            })
            .await;
        assert!(matches!(result, Err(OcrError::UnsupportedMedia(_))));
    }
}
