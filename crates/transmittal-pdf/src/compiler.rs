//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib. Images are served
//! to Typst from memory; nothing is read from disk except font files.
//! The fonts bundled with Typst are always registered after any font files,
//! so text renders even on a host with no fonts installed.

use std::path::Path;

use tracing::debug;
use typst_as_lib::TypstEngine;

use crate::error::{PdfError, Result};

/// Compiler for converting Typst markup to PDF
#[derive(Debug, Default)]
pub struct Compiler {
    /// Font files, raw bytes
    fonts: Vec<Vec<u8>>,
    /// In-memory files the markup may reference, by name
    files: Vec<(String, Vec<u8>)>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add fonts read from files
    pub fn with_font_files<P: AsRef<Path>>(mut self, font_paths: &[P]) -> Result<Self> {
        for font_path in font_paths {
            let font_path = font_path.as_ref();
            let font_bytes = std::fs::read(font_path).map_err(|e| {
                PdfError::Font(format!("Failed to read font {}: {}", font_path.display(), e))
            })?;
            debug!("Loaded font {}", font_path.display());
            self.fonts.push(font_bytes);
        }
        Ok(self)
    }

    /// Make a file available to the markup under `name`
    pub fn with_file(mut self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.files.push((name.into(), bytes));
        self
    }

    /// Compile Typst markup to PDF bytes
    pub fn compile(&self, markup: &str) -> Result<Vec<u8>> {
        let files: Vec<(&str, Vec<u8>)> = self
            .files
            .iter()
            .map(|(name, bytes)| (name.as_str(), bytes.clone()))
            .collect();

        let mut fonts: Vec<&[u8]> = self.fonts.iter().map(Vec::as_slice).collect();
        for bundled in typst_assets::fonts() {
            fonts.push(bundled);
        }

        let engine = TypstEngine::builder()
            .main_file(markup.to_string())
            .fonts(fonts)
            .with_static_file_resolver(files)
            .build();

        // compiled is Warned<Result<Document, Error>>
        let compiled = engine.compile();
        if !compiled.warnings.is_empty() {
            debug!("Typst reported {} warning(s)", compiled.warnings.len());
        }

        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transmittal_core::test_utils::TINY_PNG;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_compile_simple() {
        let result = Compiler::new().compile("#text(\"Transmittal\")");
        assert!(result.is_ok(), "Compilation failed: {:?}", result.err());
        assert!(result.unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_text_is_embedded_without_font_files() {
        let pdf = Compiler::new()
            .compile("#set text(font: \"Libertinus Serif\")\nTransmittal")
            .unwrap();
        assert!(contains(&pdf, b"/FontFile"));
        assert!(contains(&pdf, b"LibertinusSerif"));
    }

    #[test]
    fn test_compile_with_in_memory_image() {
        let markup = "#image(\"logo.png\", width: 10mm)";
        let result = Compiler::new()
            .with_file("logo.png", TINY_PNG.to_vec())
            .compile(markup);
        assert!(result.is_ok(), "Compilation failed: {:?}", result.err());
    }

    #[test]
    fn test_missing_image_fails() {
        let result = Compiler::new().compile("#image(\"nowhere.png\")");
        assert!(matches!(result, Err(PdfError::Compilation(_))));
    }

    #[test]
    fn test_missing_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Compiler::new()
            .with_font_files(&[dir.path().join("missing.ttf")])
            .unwrap_err();
        assert!(matches!(err, PdfError::Font(_)));
        assert!(err.to_string().contains("missing.ttf"));
    }
}
