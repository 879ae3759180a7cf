//! # transmittal-core
//!
//! Composition of transmittal sheets, independent of the output format.
//!
//! This crate turns a [`DocumentRecord`](transmittal_ast::DocumentRecord) and
//! a signatory into a [`TransmittalLayout`]: the humanized session date, the
//! body paragraph split into styled runs, the recipient table and the fixed
//! page geometry. The PDF and DOCX renderers only translate that layout.
//!
//! ## Example
//!
//! ```
//! use transmittal_ast::DocumentRecord;
//! use transmittal_core::{Settings, TransmittalLayout, TransmittalRequest};
//!
//! let settings = Settings::default();
//! let record: DocumentRecord = serde_json::from_str(r#"{"no": 12, "document_type": "resolution"}"#)?;
//! let signatory = settings.signatory("secretary")?;
//! let generated_at = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
//!     .and_then(|d| d.and_hms_opt(9, 0, 0))
//!     .unwrap();
//!
//! let request = TransmittalRequest::new(&record, signatory, generated_at);
//! let layout = TransmittalLayout::compose(&request, &settings);
//! assert_eq!(layout.file_name("pdf"), "Transmittal_Sheet_12.pdf");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assets;
pub mod config;
pub mod date;
pub mod error;
pub mod layout;
pub mod recipients;
pub mod record;
pub mod runs;
pub mod test_utils;
pub mod units;

pub use assets::{AssetBundle, ImageAsset, ImageFormat, LogoSlot};
pub use config::{
    AgencySettings, AssetSettings, LayoutSettings, Settings, MIN_DESIGNATION_WIDTH, SETTINGS_FILE,
};
pub use date::{generated_at_text, issued_on_text, session_date};
pub use error::{CoreError, Result};
pub use layout::{
    output_file_name, FontScale, LogoPlacement, PageGeometry, Renderer, Rgb, Rule,
    SignatoryBlock, TransmittalLayout, TransmittalRequest, CLOSING, HEADING,
};
pub use recipients::{RecipientRow, RecipientTable, NO_RECIPIENTS, SIGNING_CAPTIONS};
pub use record::ResolvedRecord;
pub use runs::{RunSplitter, SuffixMarker};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
