//! Text analysis heuristics for scanned documents.
//!
//! Everything in this crate is pure and deterministic: table detection
//! and extraction, keyword-based document classification, language
//! detection, provider quality hints, and document-level aggregation.
//! The I/O-bound stages (OCR, correction) live in their own crates.

pub mod aggregate;
pub mod classify;
pub mod language;
pub mod quality;
pub mod table;

pub use aggregate::{
    classify_pages, concatenate_pages, overall_confidence, summarize, MIN_CLASSIFY_LEN,
};
pub use classify::classify_document;
pub use language::detect_language;
pub use quality::{detect_quality_hints, extract_entities, status_for_hints};
pub use table::{detect_table, extract_table_data};
