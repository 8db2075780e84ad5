//! # scandoc-core - Document types and export serializers
//!
//! Core data model for the scandoc document-OCR pipeline: the
//! [`ProcessedDocument`] aggregate root and its [`PageResult`]s, the error
//! taxonomy, and the pure export serializers (TXT/CSV/JSON/HTML).
//!
//! ## Model invariants
//!
//! - Page confidences are always integers in 0-100 ([`clamp_confidence`]).
//! - `has_table` is true exactly when table data is present and non-empty.
//! - Text segments tile the page text in order, covering `0..len`.
//! - Summary metrics are a snapshot taken at pipeline completion; editing
//!   page text during review does not recompute them.

pub mod document;
pub mod doctype;
pub mod error;
pub mod export;
pub mod language;
pub mod store;

pub use document::{
    clamp_confidence, DocumentSummary, Entity, ExportLinks, PageResult, PageStatus,
    ProcessedDocument, QualityHint, TextSegment,
};
pub use doctype::{DocumentType, DocumentTypeInfo};
pub use error::{Result, ScandocError};
pub use language::Language;
