//! transmittal CLI - Command-line interface library
//!
//! This library provides the CLI functionality for transmittal sheets:
//! - pdf: Render a record to `Transmittal_Sheet_<no>.pdf`
//! - docx: Render a record to `Transmittal_Sheet_<no>.docx`
//! - preview: Write an HTML page (or bare data URI) previewing the PDF
//! - session-date: Show how an approval date is humanized
//! - signatories: List the configured signatories
//!
//! # Library Usage
//!
//! ```ignore
//! use std::path::Path;
//! use transmittal_cli::{load_settings, pdf_command, ComposeArgs};
//!
//! let args = ComposeArgs {
//!     input: "record.json".into(),
//!     signatory: Some("secretary".to_string()),
//!     generated_at: None,
//! };
//! let (settings, base_dir) = load_settings(None)?;
//! let written = pdf_command(&args, Path::new("out"), &settings, &base_dir)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Render a record fetched from the API
//! transmittal pdf record.json --signatory vice-mayor --output out/
//!
//! # Same sheet as DOCX, with an explicit settings file
//! transmittal --config city/transmittal.toml docx record.json
//!
//! # Self-contained preview page
//! transmittal preview record.json --output preview.html
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{
    docx_command, load_record, load_settings, pdf_command, preview_command,
    session_date_command, signatories_command,
};
pub use app::{disk_file_name, run_cli, ComposeArgs, OutputFormat, PreviewFormat};
