//! Embedded media
//!
//! Images are stored under `word/media/` and referenced by relationship ID.
//! Byte-identical images are stored once and share one relationship.

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use tracing::debug;
use transmittal_core::ImageAsset;

use crate::relationships::Relationships;

/// Media parts of a package and the relationships pointing at them
#[derive(Debug, Default)]
pub struct MediaStore {
    /// Content hash to relationship ID
    by_hash: HashMap<String, String>,
    /// (archive path, bytes) in insertion order
    files: Vec<(String, Vec<u8>)>,
    /// Extensions in use, for `[Content_Types].xml`
    extensions: Vec<(&'static str, &'static str)>,
}

impl MediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed an image, returning the relationship ID to reference it by
    pub fn embed(&mut self, image: &ImageAsset, relationships: &mut Relationships) -> String {
        let hash = content_hash(&image.bytes);
        if let Some(rel_id) = self.by_hash.get(&hash) {
            debug!("Reusing {} for {}", rel_id, image.name);
            return rel_id.clone();
        }

        let rel_id = relationships.add_image(format!("media/{}", image.name));
        self.files
            .push((format!("word/media/{}", image.name), image.bytes.clone()));

        let ext = (image.format.extension(), image.format.content_type());
        if !self.extensions.contains(&ext) {
            self.extensions.push(ext);
        }

        self.by_hash.insert(hash, rel_id.clone());
        rel_id
    }

    /// Stored media parts
    pub fn files(&self) -> &[(String, Vec<u8>)] {
        &self.files
    }

    /// (extension, content type) pairs of the stored media
    pub fn extensions(&self) -> &[(&'static str, &'static str)] {
        &self.extensions
    }
}

/// SHA-256 of image bytes, as hex
fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    format!(
        "sha256:{}",
        result.iter().map(|b| format!("{:02x}", b)).collect::<String>()
    )
}
