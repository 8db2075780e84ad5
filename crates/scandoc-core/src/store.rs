//! Row types for the hosted-backend relational schema.
//!
//! The pipeline itself is storage-agnostic; these serde structs mirror the
//! persisted schema (documents, document_pages, document_exports) so that
//! callers talking to the hosted backend exchange well-typed rows.

use crate::document::{Entity, PageStatus, QualityHint};
use crate::language::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a stored document record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Processing in flight
    #[default]
    Processing,
    /// Completed successfully
    Completed,
    /// Run aborted; no partial pages are kept as a completed document
    Failed,
}

/// Row in the `documents` table, keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRow {
    /// Primary key
    pub id: String,
    /// Owning user id
    pub user_id: String,
    /// Storage URL of the original upload
    pub original_url: String,
    /// Mime type of the upload
    pub mime_type: String,
    /// Record status
    pub status: DocumentStatus,
    /// Total pages in the source document (not the processed subset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
    /// Record creation time
    pub created_at: DateTime<Utc>,
}

/// Row in the `document_pages` table, referencing its document by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPageRow {
    /// Foreign key to [`DocumentRow::id`]
    pub document_id: String,
    /// 1-based page number
    pub page: u32,
    /// Page status
    pub status: PageStatus,
    /// Page confidence (0-100)
    pub confidence: u8,
    /// Quality hints for the page
    pub quality_hints: Vec<QualityHint>,
    /// Raw OCR text
    pub raw_text: String,
    /// AI-corrected text; absent when correction failed or was skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_text: Option<String>,
    /// Table presence flag (matches `table_data`)
    pub has_table: bool,
    /// Extracted table grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_data: Option<Vec<Vec<String>>>,
    /// Entities extracted from the page
    pub entities: Vec<Entity>,
    /// Detected language for the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<Language>,
}

/// Row in the `document_exports` table holding generated artifact URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentExportRow {
    /// Foreign key to [`DocumentRow::id`]
    pub document_id: String,
    /// JSON artifact URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_url: Option<String>,
    /// CSV artifact URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_url: Option<String>,
}
