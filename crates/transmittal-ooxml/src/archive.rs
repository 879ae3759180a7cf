//! In-memory OOXML package
//!
//! A DOCX file is a ZIP archive of XML parts and media. The package is built
//! up part by part and written out in one pass.

use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, Write};

use zip::read::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

use crate::error::{OoxmlError, Result};

/// Path of the main document part
pub const DOCUMENT_PART: &str = "word/document.xml";

/// An OOXML package held in memory
#[derive(Debug, Default)]
pub struct OoxmlArchive {
    /// All files in the archive, keyed by path
    files: HashMap<String, Vec<u8>>,
}

impl OoxmlArchive {
    /// Create an empty package
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a package from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut files = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            files.insert(name, contents);
        }

        Ok(Self { files })
    }

    /// Read a package from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Get a file's contents by path
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Get a file's contents as a string
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Get the main document part
    pub fn document_xml(&self) -> Result<&[u8]> {
        self.get(DOCUMENT_PART)
            .ok_or_else(|| OoxmlError::MissingFile(DOCUMENT_PART.to_string()))
    }

    /// Check if a file exists in the package
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// All paths, sorted
    pub fn file_list(&self) -> Vec<&str> {
        let mut paths: Vec<_> = self.files.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Set or update a file's contents
    pub fn set(&mut self, path: impl Into<String>, contents: Vec<u8>) {
        self.files.insert(path.into(), contents);
    }

    /// Set a file's contents from a string
    pub fn set_string(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into().into_bytes());
    }

    /// Write the package to any writer
    ///
    /// Parts are written in path order with a fixed timestamp, so the same
    /// parts always produce the same bytes.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        for path in self.file_list() {
            zip.start_file(path, options)?;
            zip.write_all(&self.files[path])?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Write the package to a byte vector
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_operations() {
        let mut archive = OoxmlArchive::new();
        archive.set_string("test.xml", "<root/>");
        assert!(archive.contains("test.xml"));
        assert_eq!(archive.get_string("test.xml"), Some("<root/>".to_string()));
        assert!(archive.get("missing.xml").is_none());
    }

    #[test]
    fn test_missing_document_part() {
        let archive = OoxmlArchive::new();
        assert!(matches!(
            archive.document_xml(),
            Err(OoxmlError::MissingFile(ref p)) if p == DOCUMENT_PART
        ));
    }

    #[test]
    fn test_roundtrip_through_zip() {
        let mut archive = OoxmlArchive::new();
        archive.set_string("word/document.xml", "<w:document/>");
        archive.set("word/media/logo.png", vec![1, 2, 3]);

        let bytes = archive.to_bytes().unwrap();
        let restored = OoxmlArchive::from_bytes(&bytes).unwrap();

        assert_eq!(restored.file_list(), vec!["word/document.xml", "word/media/logo.png"]);
        assert_eq!(restored.get("word/media/logo.png"), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn test_output_is_byte_stable() {
        let build = || {
            let mut archive = OoxmlArchive::new();
            archive.set_string("b.xml", "<b/>");
            archive.set_string("a.xml", "<a/>");
            archive.set_string("c.xml", "<c/>");
            archive.to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        let mut archive = OoxmlArchive::new();
        archive.set_string(DOCUMENT_PART, "<w:document/>");
        archive
            .write_to(std::fs::File::create(&path).unwrap())
            .unwrap();

        let restored = OoxmlArchive::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
        assert!(restored.document_xml().is_ok());
    }
}
