//! Error types for document processing operations.
//!
//! This module defines the error taxonomy shared across the scandoc crates
//! and provides a convenience [`Result`] alias.

use thiserror::Error;

/// Error types that can occur during document processing.
///
/// The taxonomy follows the processing lifecycle: input validation happens
/// before any external call, storage and provider failures abort the run,
/// and export failures are scoped to the serializer that raised them.
///
/// # Examples
///
/// ```rust,ignore
/// use scandoc_core::{Result, ScandocError};
///
/// fn check_size(size: usize, limit: usize) -> Result<()> {
///     if size > limit {
///         return Err(ScandocError::ValidationError(format!(
///             "file size {size} exceeds limit {limit}"
///         )));
///     }
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum ScandocError {
    /// Input rejected before any external call (file too large, unsupported
    /// mime type, empty or invalid page-range selection). No partial state
    /// is created.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Upload/storage failure. Aborts the run; a document record that was
    /// already created is marked failed.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// OCR provider failure. Any non-success provider response aborts the
    /// remaining page processing for the document; partial page results are
    /// not persisted.
    #[error("OCR provider error: {0}")]
    ProviderError(String),

    /// Export serialization failure, scoped to the requested format.
    #[error("Export error: {0}")]
    ExportError(String),

    /// Invalid session state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Type alias for [`Result<T, ScandocError>`].
pub type Result<T> = std::result::Result<T, ScandocError>;
