//! Letterhead image assets
//!
//! The four header logos are loaded completely before any layout happens.
//! Both renderers call [`AssetBundle::require`] and propagate its error.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::config::AssetSettings;
use crate::error::{CoreError, Result};

/// Fixed header positions, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogoSlot {
    OuterLeft,
    InnerLeft,
    InnerRight,
    OuterRight,
}

impl LogoSlot {
    pub const ALL: [LogoSlot; 4] = [
        LogoSlot::OuterLeft,
        LogoSlot::InnerLeft,
        LogoSlot::InnerRight,
        LogoSlot::OuterRight,
    ];

    /// Stable identifier, also used as the media file stem
    pub fn id(self) -> &'static str {
        match self {
            Self::OuterLeft => "logo-outer-left",
            Self::InnerLeft => "logo-inner-left",
            Self::InnerRight => "logo-inner-right",
            Self::OuterRight => "logo-outer-right",
        }
    }
}

impl fmt::Display for LogoSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raster formats accepted for logos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Detect the format from magic bytes
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// A loaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// File name inside the rendered document ("logo-outer-left.png")
    pub name: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// The complete set of letterhead images
#[derive(Debug, Clone, Default)]
pub struct AssetBundle {
    logos: BTreeMap<LogoSlot, ImageAsset>,
}

impl AssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a logo from raw bytes, rejecting anything but PNG or JPEG
    pub fn insert(&mut self, slot: LogoSlot, bytes: Vec<u8>) -> Result<()> {
        let format =
            ImageFormat::sniff(&bytes).ok_or_else(|| CoreError::UnsupportedImage(slot.to_string()))?;
        let name = format!("{}.{}", slot.id(), format.extension());
        self.logos.insert(slot, ImageAsset { name, format, bytes });
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_logo(mut self, slot: LogoSlot, bytes: Vec<u8>) -> Result<Self> {
        self.insert(slot, bytes)?;
        Ok(self)
    }

    /// Load every logo named in the settings, relative to `base_dir`
    ///
    /// Fails on the first logo that cannot be read or is not an image.
    pub fn load(settings: &AssetSettings, base_dir: &Path) -> Result<Self> {
        let dir = base_dir.join(&settings.dir);
        let mut bundle = Self::new();

        for slot in LogoSlot::ALL {
            let path = dir.join(settings.logo(slot));
            let bytes = std::fs::read(&path).map_err(|e| {
                CoreError::Asset(format!("cannot read {} from {}: {}", slot, path.display(), e))
            })?;
            debug!("Loaded {} ({} bytes) from {}", slot, bytes.len(), path.display());
            bundle.insert(slot, bytes)?;
        }

        Ok(bundle)
    }

    /// Get a logo, failing when it was never loaded
    pub fn require(&self, slot: LogoSlot) -> Result<&ImageAsset> {
        self.logos
            .get(&slot)
            .ok_or_else(|| CoreError::Asset(format!("{} is not loaded", slot)))
    }

    /// Fail unless all four logos are present
    pub fn ensure_complete(&self) -> Result<()> {
        for slot in LogoSlot::ALL {
            self.require(slot)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }
}
