//! Error types for layout composition

use thiserror::Error;

/// Errors that can occur while preparing a transmittal sheet
#[derive(Error, Debug)]
pub enum CoreError {
    /// A letterhead image could not be loaded
    #[error("Asset error: {0}")]
    Asset(String),

    /// Image bytes are neither PNG nor JPEG
    #[error("Unsupported image format for {0}")]
    UnsupportedImage(String),

    /// Settings file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Settings parsed but are inconsistent
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// No signatory profile with the requested key
    #[error("Unknown signatory: {0}")]
    UnknownSignatory(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
