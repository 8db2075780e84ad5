//! Quality hints and entity extraction from provider metadata.
//!
//! Hints are derived from provider-supplied structural signals: page
//! transforms (skew) and the image quality score (blur and shadow are
//! layered, a very poor score fires both). Entities are filtered from the
//! provider's mention list to the ones referencing the page at hand.

use scandoc_core::{Entity, PageStatus, QualityHint};
use scandoc_ocr::{PageTransform, ProviderEntity};

/// Absolute rotation component above which a page counts as skewed.
pub const SKEW_THRESHOLD: f64 = 0.1;
/// Quality score below which the page counts as blurred.
pub const BLUR_THRESHOLD: f64 = 0.5;
/// Quality score below which the page counts as shadowed (layered with blur).
pub const SHADOW_THRESHOLD: f64 = 0.3;

/// Derive quality hints from provider page signals.
///
/// A missing quality score is treated as perfect (no blur/shadow hints).
#[must_use = "returns the derived hints without using it"]
pub fn detect_quality_hints(
    transforms: &[PageTransform],
    quality_score: Option<f64>,
) -> Vec<QualityHint> {
    let mut hints = Vec::new();

    let skewed = transforms
        .iter()
        .filter_map(PageTransform::rotation_component)
        .any(|component| component.abs() > SKEW_THRESHOLD);
    if skewed {
        hints.push(QualityHint::Skew);
    }

    let score = quality_score.unwrap_or(1.0);
    if score < BLUR_THRESHOLD {
        hints.push(QualityHint::Blur);
    }
    if score < SHADOW_THRESHOLD {
        hints.push(QualityHint::Shadow);
    }

    hints
}

/// Page status implied by the derived hints.
///
/// Any hint makes the page `low_quality`; a page with no hints is `ok`.
/// The `error` status is set explicitly by the caller for pages the
/// provider produced no text for; it is never derived here.
#[inline]
#[must_use = "returns the derived status without using it"]
pub fn status_for_hints(hints: &[QualityHint]) -> PageStatus {
    if hints.is_empty() {
        PageStatus::Ok
    } else {
        PageStatus::LowQuality
    }
}

/// Extract the entities referencing a given 0-based page index.
///
/// Each matching mention becomes one [`Entity`] with the provider
/// confidence scaled to 0-100, or 0 when the provider did not report one.
#[must_use = "returns the extracted entities without using it"]
pub fn extract_entities(entities: &[ProviderEntity], page_index: usize) -> Vec<Entity> {
    entities
        .iter()
        .filter(|entity| entity.page_refs.contains(&page_index))
        .map(|entity| Entity {
            field: entity.entity_type.clone(),
            value: entity.mention_text.clone(),
            confidence: entity
                .confidence
                .map_or(0, |c| scandoc_core::clamp_confidence(c * 100.0)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(component: f64) -> PageTransform {
        PageTransform {
            rows: vec![vec![1.0, component, 0.0], vec![-component, 1.0, 0.0]],
        }
    }

    #[test]
    fn test_skew_threshold() {
        assert_eq!(
            detect_quality_hints(&[transform(0.2)], None),
            vec![QualityHint::Skew]
        );
        assert_eq!(
            detect_quality_hints(&[transform(-0.15)], None),
            vec![QualityHint::Skew]
        );
        // At or below the threshold: no hint.
        assert!(detect_quality_hints(&[transform(0.1)], None).is_empty());
        assert!(detect_quality_hints(&[transform(0.05)], None).is_empty());
    }

    #[test]
    fn test_blur_and_shadow_layering() {
        assert_eq!(
            detect_quality_hints(&[], Some(0.4)),
            vec![QualityHint::Blur]
        );
        // Below the shadow threshold both hints fire.
        assert_eq!(
            detect_quality_hints(&[], Some(0.2)),
            vec![QualityHint::Blur, QualityHint::Shadow]
        );
        assert!(detect_quality_hints(&[], Some(0.9)).is_empty());
    }

    #[test]
    fn test_missing_quality_score_is_perfect() {
        assert!(detect_quality_hints(&[], None).is_empty());
    }

    #[test]
    fn test_status_derivation() {
        assert_eq!(status_for_hints(&[]), PageStatus::Ok);
        assert_eq!(
            status_for_hints(&[QualityHint::Blur]),
            PageStatus::LowQuality
        );
        assert_eq!(
            status_for_hints(&[QualityHint::Blur, QualityHint::Shadow]),
            PageStatus::LowQuality
        );
    }

    #[test]
    fn test_entity_extraction_filters_by_page() {
        let entities = vec![
            ProviderEntity {
                entity_type: "date".to_string(),
                mention_text: "01/02/2024".to_string(),
                confidence: Some(0.92),
                page_refs: vec![0],
            },
            ProviderEntity {
                entity_type: "total_amount".to_string(),
                mention_text: "R$ 1.250,00".to_string(),
                confidence: None,
                page_refs: vec![1],
            },
            ProviderEntity {
                entity_type: "supplier".to_string(),
                mention_text: "ACME Ltda".to_string(),
                confidence: Some(0.6),
                page_refs: vec![0, 1],
            },
        ];

        let page0 = extract_entities(&entities, 0);
        assert_eq!(page0.len(), 2);
        assert_eq!(page0[0].field, "date");
        assert_eq!(page0[0].confidence, 92);
        assert_eq!(page0[1].field, "supplier");
        assert_eq!(page0[1].confidence, 60);

        let page1 = extract_entities(&entities, 1);
        assert_eq!(page1.len(), 2);
        // Absent provider confidence maps to 0.
        assert_eq!(page1[0].confidence, 0);

        assert!(extract_entities(&entities, 5).is_empty());
    }
}
