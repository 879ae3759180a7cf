//! Error types for PDF generation

use thiserror::Error;
use transmittal_core::CoreError;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur during PDF generation and preview
#[derive(Error, Debug)]
pub enum PdfError {
    /// Typst compilation error
    #[error("Typst compilation failed: {0}")]
    Compilation(String),

    /// Font loading error
    #[error("Font error: {0}")]
    Font(String),

    /// A letterhead asset is missing or unusable
    #[error(transparent)]
    Asset(#[from] CoreError),

    /// A preview data URI could not be turned back into a document
    #[error("Invalid preview data URI: {0}")]
    Preview(String),
}
