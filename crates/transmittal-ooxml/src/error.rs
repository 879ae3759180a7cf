//! Error types for DOCX rendering

use thiserror::Error;
use transmittal_core::CoreError;

/// Errors that can occur while producing a DOCX package
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Error reading or writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing XML content
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Required part not found in the package
    #[error("Required file not found: {0}")]
    MissingFile(String),

    /// Generated part is not well-formed
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),

    /// A letterhead asset is missing or unusable
    #[error(transparent)]
    Asset(#[from] CoreError),
}

/// Result type for DOCX operations
pub type Result<T> = std::result::Result<T, OoxmlError>;
