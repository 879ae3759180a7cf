//! transmittal-pdf - PDF generation via Typst
//!
//! # Architecture
//!
//! The PDF pipeline has two stages:
//!
//! 1. **Transpiler** - Converts a [`TransmittalLayout`] to Typst markup
//! 2. **Compiler** - Compiles the markup, with the logos served from memory,
//!    to PDF bytes
//!
//! The result is either a named download or a base64 data URI for in-app
//! preview.
//!
//! # Example
//!
//! ```no_run
//! use transmittal_core::test_utils::{fixed_clock, sample_assets, sample_record};
//! use transmittal_core::{Settings, TransmittalLayout, TransmittalRequest};
//! use transmittal_pdf::{render_pdf, PdfOutput, PdfTarget};
//!
//! let settings = Settings::default();
//! let record = sample_record();
//! let request = TransmittalRequest::new(&record, settings.signatory("secretary")?, fixed_clock());
//! let layout = TransmittalLayout::compose(&request, &settings);
//!
//! if let PdfOutput::Preview(uri) = render_pdf(&layout, &sample_assets(), PdfTarget::Preview)? {
//!     assert!(uri.starts_with("data:application/pdf;base64,"));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod compiler;
mod error;
pub mod preview;
mod transpiler;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use preview::{decode_data_uri, encode_data_uri, html_preview, PDF_DATA_URI_PREFIX};
pub use transpiler::Transpiler;

use tracing::info;
use transmittal_core::{AssetBundle, TransmittalLayout};

/// File extension of rendered sheets
pub const EXTENSION: &str = "pdf";

/// What the caller wants back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PdfTarget {
    /// Named file download
    #[default]
    Download,
    /// `data:application/pdf;base64,...` URI
    Preview,
}

/// A rendered PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfOutput {
    Download { file_name: String, bytes: Vec<u8> },
    Preview(String),
}

impl PdfOutput {
    /// PDF bytes, decoding the preview URI if needed
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::Download { bytes, .. } => Ok(bytes),
            Self::Preview(uri) => decode_data_uri(&uri),
        }
    }
}

/// Render a transmittal sheet to PDF with the default compiler
///
/// Fails when any of the four logos is missing from `assets`.
pub fn render_pdf(
    layout: &TransmittalLayout,
    assets: &AssetBundle,
    target: PdfTarget,
) -> Result<PdfOutput> {
    render_pdf_with(Compiler::new(), layout, assets, target)
}

/// Render with a preconfigured compiler (extra fonts)
pub fn render_pdf_with(
    compiler: Compiler,
    layout: &TransmittalLayout,
    assets: &AssetBundle,
    target: PdfTarget,
) -> Result<PdfOutput> {
    assets.ensure_complete()?;

    let mut compiler = compiler;
    let mut logo_names = Vec::with_capacity(layout.logos.len());
    for placement in &layout.logos {
        let image = assets.require(placement.slot)?;
        logo_names.push(image.name.clone());
        compiler = compiler.with_file(image.name.clone(), image.bytes.clone());
    }

    let markup = Transpiler::transpile(layout, &logo_names);
    let bytes = compiler.compile(&markup)?;
    info!("Rendered PDF ({} bytes)", bytes.len());

    Ok(match target {
        PdfTarget::Download => PdfOutput::Download {
            file_name: layout.file_name(EXTENSION),
            bytes,
        },
        PdfTarget::Preview => PdfOutput::Preview(encode_data_uri(&bytes)),
    })
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let _ = Transpiler::transpile;
        let _ = render_pdf;
        assert_eq!(PdfTarget::default(), PdfTarget::Download);
    }

    #[test]
    fn test_into_bytes_decodes_preview() {
        let uri = encode_data_uri(b"%PDF-1.7");
        assert_eq!(PdfOutput::Preview(uri).into_bytes().unwrap(), b"%PDF-1.7");
    }
}
