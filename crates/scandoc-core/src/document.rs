//! Core document model: pages, segments, quality hints and the
//! [`ProcessedDocument`] aggregate root.
//!
//! A [`ProcessedDocument`] is created once per upload-and-process cycle and
//! owns its [`PageResult`]s for its lifetime. Pages are immutable from the
//! pipeline's perspective; only their text may be edited during manual
//! review, and summary metrics are a snapshot taken at pipeline completion
//! (they are not recomputed on edit).

use crate::doctype::DocumentTypeInfo;
use crate::language::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Processing status of a single page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    /// Page processed with no quality hints
    #[default]
    Ok,
    /// Page processed but at least one quality hint fired
    LowQuality,
    /// Provider produced no text for this page
    Error,
}

impl std::fmt::Display for PageStatus {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::LowQuality => write!(f, "low_quality"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for PageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Self::Ok),
            "low_quality" => Ok(Self::LowQuality),
            "error" => Ok(Self::Error),
            _ => Err(format!(
                "unknown page status: '{s}' (expected: ok, low_quality, error)"
            )),
        }
    }
}

/// Tag describing a detected image defect affecting OCR reliability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QualityHint {
    /// Page transform shows a rotation component
    Skew,
    /// Provider quality score below the blur threshold
    Blur,
    /// Provider quality score below the shadow threshold
    Shadow,
    /// Provider-specific hint not covered by the fixed tags
    Other(String),
}

impl QualityHint {
    /// Stable string tag for this hint.
    #[must_use = "returns the hint tag without using it"]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Skew => "skew",
            Self::Blur => "blur",
            Self::Shadow => "shadow",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl std::fmt::Display for QualityHint {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for QualityHint {
    fn from(s: &str) -> Self {
        match s {
            "skew" => Self::Skew,
            "blur" => Self::Blur,
            "shadow" => Self::Shadow,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for QualityHint {
    #[inline]
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<QualityHint> for String {
    #[inline]
    fn from(hint: QualityHint) -> Self {
        hint.as_str().to_string()
    }
}

impl Serialize for QualityHint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QualityHint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

/// Field/value pair extracted from a page, with its own confidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type reported by the provider (e.g. a detected date or name)
    pub field: String,
    /// Mention text
    pub value: String,
    /// Extraction confidence (0-100)
    pub confidence: u8,
}

/// Sub-span of a page's text with its own confidence.
///
/// Segments tile the page text in order: non-overlapping, covering offsets
/// `0..text.len()`. The `[start_index, end_index)` offsets index into the
/// owning page's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    /// Segment text
    pub text: String,
    /// Segment confidence (0-100)
    pub confidence: u8,
    /// Inclusive start offset into the page text
    #[serde(rename = "startIndex")]
    pub start_index: usize,
    /// Exclusive end offset into the page text
    #[serde(rename = "endIndex")]
    pub end_index: usize,
}

impl TextSegment {
    /// Single segment covering the whole page text.
    #[must_use = "creates a segment without using it"]
    pub fn covering(text: &str, confidence: u8) -> Self {
        Self {
            text: text.to_string(),
            confidence,
            start_index: 0,
            end_index: text.len(),
        }
    }

    /// Check that `segments` tile `text` in order: contiguous,
    /// non-overlapping, covering `0..text.len()`.
    #[must_use = "returns the tiling check result without using it"]
    pub fn tile(text: &str, segments: &[Self]) -> bool {
        let mut cursor = 0usize;
        for segment in segments {
            if segment.start_index != cursor || segment.end_index < segment.start_index {
                return false;
            }
            cursor = segment.end_index;
        }
        cursor == text.len()
    }
}

/// Clamp a raw confidence value to the 0-100 integer range.
#[inline]
#[must_use = "returns the clamped confidence without using it"]
pub fn clamp_confidence(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    // Round before clamping so 99.6 maps to 100, not 99.
    let rounded = raw.round();
    rounded.clamp(0.0, 100.0) as u8
}

/// Result of processing a single page.
///
/// Invariant: `has_table` is true exactly when `table_data` is present and
/// non-empty. Use [`PageResult::set_table`] to keep the two in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-based page number, unique and ascending within a document
    pub page_number: u32,
    /// Recognized (or review-edited) page text
    pub text: String,
    /// Segments tiling the page text
    pub segments: Vec<TextSegment>,
    /// Page confidence (0-100)
    pub confidence: u8,
    /// Processing status
    pub status: PageStatus,
    /// Detected quality hints
    pub quality_hints: Vec<QualityHint>,
    /// True when a table grid was extracted for this page
    pub has_table: bool,
    /// Extracted table grid, header row first; rows may vary in width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_data: Option<Vec<Vec<String>>>,
    /// Entities extracted from this page, in provider order
    pub entities: Vec<Entity>,
    /// Per-page language tag, when detected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl PageResult {
    /// Create a page result with a single segment covering the text.
    ///
    /// The confidence is clamped to 0-100; status starts as [`PageStatus::Ok`]
    /// and no table or entities are attached.
    #[must_use = "creates a page result without using it"]
    pub fn new(page_number: u32, text: impl Into<String>, confidence: f64) -> Self {
        let text = text.into();
        let confidence = clamp_confidence(confidence);
        Self {
            page_number,
            segments: vec![TextSegment::covering(&text, confidence)],
            text,
            confidence,
            status: PageStatus::Ok,
            quality_hints: Vec::new(),
            has_table: false,
            table_data: None,
            entities: Vec::new(),
            language: None,
        }
    }

    /// Attach (or clear) table data, maintaining the `has_table` invariant.
    ///
    /// An empty grid is treated as no table.
    pub fn set_table(&mut self, table: Option<Vec<Vec<String>>>) {
        match table {
            Some(grid) if !grid.is_empty() => {
                self.has_table = true;
                self.table_data = Some(grid);
            }
            _ => {
                self.has_table = false;
                self.table_data = None;
            }
        }
    }

    /// Replace the page text during manual review.
    ///
    /// Rewrites the segments to a single covering segment at the page
    /// confidence. Does not touch table data, entities or status; summary
    /// metrics of the owning document keep their completion-time snapshot.
    pub fn edit_text(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
        self.segments = vec![TextSegment::covering(&self.text, self.confidence)];
    }
}

/// Document-level summary metrics, snapshot at pipeline completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Mean page confidence, rounded (0-100)
    #[serde(rename = "readabilityConfidence")]
    pub readability_confidence: u8,
    /// Percentage of pages with status `ok`, rounded (0-100)
    #[serde(rename = "pageSuccessRate")]
    pub page_success_rate: u8,
    /// Count of pages with a detected table
    #[serde(rename = "tablesDetected")]
    pub tables_detected: usize,
    /// Sum of entity counts across pages
    #[serde(rename = "fieldsDetected")]
    pub fields_detected: usize,
}

/// URLs of generated export artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLinks {
    /// Generated JSON artifact URL
    #[serde(rename = "jsonUrl", skip_serializing_if = "Option::is_none")]
    pub json_url: Option<String>,
    /// Generated CSV artifact URL
    #[serde(rename = "csvUrl", skip_serializing_if = "Option::is_none")]
    pub csv_url: Option<String>,
}

/// Aggregate root owning the processed pages and summary metrics.
///
/// Created once per upload-and-process cycle and discarded/replaced on
/// "process new document"; never partially updated concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Original file name
    pub file_name: String,
    /// Processed pages, one per selected source page, ascending page number
    pub pages: Vec<PageResult>,
    /// Document-level confidence: rounded mean of page confidences (0-100)
    pub overall_confidence: u8,
    /// Number of processed pages; may differ from the source page count
    /// when a page subset was selected
    pub total_pages: usize,
    /// Completion timestamp
    pub processed_at: DateTime<Utc>,
    /// Wall-clock processing duration
    pub processing_time: Duration,
    /// Classified document type, when enough text was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentTypeInfo>,
    /// Dominant language, when enough text was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<Language>,
    /// Summary metrics snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DocumentSummary>,
    /// Export artifact links, when exports were generated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exports: Option<ExportLinks>,
}

impl ProcessedDocument {
    /// Look up a page by its 1-based page number.
    #[must_use = "returns the page without using it"]
    pub fn page(&self, page_number: u32) -> Option<&PageResult> {
        self.pages.iter().find(|p| p.page_number == page_number)
    }

    /// Edit the text of a page during manual review.
    ///
    /// Returns false when the page number does not exist. Summary metrics,
    /// document type and language are NOT recomputed; they remain the
    /// snapshot taken at pipeline completion.
    pub fn edit_page_text(&mut self, page_number: u32, new_text: impl Into<String>) -> bool {
        match self.pages.iter_mut().find(|p| p.page_number == page_number) {
            Some(page) => {
                page.edit_text(new_text);
                true
            }
            None => false,
        }
    }
}
