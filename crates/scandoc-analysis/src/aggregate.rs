//! Document-level aggregation over per-page results.
//!
//! The aggregator folds page results into the document summary, the
//! overall confidence, and the concatenated text the classifier and
//! language detector run on. Classification is skipped for documents
//! whose combined text is too short to score meaningfully.

use scandoc_core::{
    clamp_confidence, DocumentSummary, DocumentTypeInfo, Language, PageResult, PageStatus,
};

use crate::classify::classify_document;
use crate::language::detect_language;

/// Minimum combined text length for type and language classification.
///
/// Shorter documents keep the default type (`other`) and language
/// (`pt-BR`) instead of classifying on near-empty text.
pub const MIN_CLASSIFY_LEN: usize = 100;

/// Mean page confidence, rounded to the nearest integer. 0 for no pages.
#[must_use = "returns the overall confidence without using it"]
pub fn overall_confidence(pages: &[PageResult]) -> u8 {
    if pages.is_empty() {
        return 0;
    }
    let total: u32 = pages.iter().map(|page| u32::from(page.confidence)).sum();
    clamp_confidence(f64::from(total) / pages.len() as f64)
}

/// Fold page results into the document summary.
///
/// An empty document yields an all-zero summary.
#[must_use = "returns the summary without using it"]
pub fn summarize(pages: &[PageResult]) -> DocumentSummary {
    if pages.is_empty() {
        return DocumentSummary::default();
    }

    let ok_pages = pages
        .iter()
        .filter(|page| page.status == PageStatus::Ok)
        .count();
    let success_rate = 100.0 * ok_pages as f64 / pages.len() as f64;
    log::debug!("summarizing {} pages, {ok_pages} ok", pages.len());

    DocumentSummary {
        readability_confidence: overall_confidence(pages),
        page_success_rate: clamp_confidence(success_rate),
        tables_detected: pages.iter().filter(|page| page.has_table).count(),
        fields_detected: pages.iter().map(|page| page.entities.len()).sum(),
    }
}

/// Concatenate page texts with single spaces, in page order.
#[must_use = "returns the concatenated text without using it"]
pub fn concatenate_pages(pages: &[PageResult]) -> String {
    let texts: Vec<&str> = pages.iter().map(|page| page.text.as_str()).collect();
    texts.join(" ")
}

/// Classify document type and language from the combined page text.
///
/// Returns `None` when the combined text does not reach
/// [`MIN_CLASSIFY_LEN`]; near-empty documents stay unclassified.
#[must_use = "returns the classification without using it"]
pub fn classify_pages(pages: &[PageResult]) -> Option<(DocumentTypeInfo, Language)> {
    let combined = concatenate_pages(pages);
    if combined.len() > MIN_CLASSIFY_LEN {
        Some((classify_document(&combined), detect_language(&combined)))
    } else {
        None
    }
}
