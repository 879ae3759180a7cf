//! # transmittal-ooxml
//!
//! DOCX rendering for transmittal sheets.
//!
//! The package is built from scratch in memory: content types,
//! relationships, styles, a footer part, the four letterhead logos and the
//! document body translated from a [`TransmittalLayout`].
//!
//! ## Example
//!
//! ```no_run
//! use transmittal_core::test_utils::{fixed_clock, sample_assets, sample_record};
//! use transmittal_core::{Settings, TransmittalLayout, TransmittalRequest};
//!
//! let settings = Settings::default();
//! let record = sample_record();
//! let request = TransmittalRequest::new(&record, settings.signatory("mayor")?, fixed_clock());
//! let layout = TransmittalLayout::compose(&request, &settings);
//!
//! let docx = transmittal_ooxml::render_docx(&layout, &sample_assets())?;
//! std::fs::write(&docx.file_name, &docx.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod archive;
pub mod error;
pub mod media;
pub mod package;
pub mod relationships;
pub mod writer;
pub mod xml;

pub use archive::OoxmlArchive;
pub use error::{OoxmlError, Result};
pub use relationships::Relationships;
pub use writer::DocxWriter;

use transmittal_core::{AssetBundle, TransmittalLayout};

/// File extension of rendered sheets
pub const EXTENSION: &str = "docx";

/// A rendered DOCX download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxOutput {
    /// `Transmittal_Sheet_<no>.docx`
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Render a transmittal sheet as DOCX
///
/// Fails when any of the four logos is missing from `assets`.
pub fn render_docx(layout: &TransmittalLayout, assets: &AssetBundle) -> Result<DocxOutput> {
    let bytes = DocxWriter::generate(layout, assets)?;
    Ok(DocxOutput {
        file_name: layout.file_name(EXTENSION),
        bytes,
    })
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
