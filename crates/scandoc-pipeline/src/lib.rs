//! Sequential document processing pipeline.
//!
//! Ties the other crates together: validates inputs, runs the OCR
//! provider page by page, applies optional AI correction, runs the text
//! analysis heuristics and aggregates the result into a
//! [`scandoc_core::ProcessedDocument`]. Progress is reported through a
//! caller-supplied callback; there is no worker pool and no retry.

pub mod options;
pub mod processor;
pub mod session;

pub use options::{validate_input, PageSelection, MAX_FILE_SIZE, SUPPORTED_IMAGE_MIMES};
pub use processor::{DocumentProcessor, InputDocument};
pub use session::SessionState;
