//! Signatory profiles
//!
//! The person signing a transmittal is chosen from a small fixed set of
//! profiles before composition. Profiles are configuration, never edited by
//! the composer.

use serde::{Deserialize, Serialize};

/// Maximum number of title lines printed under the signatory's name
pub const MAX_TITLE_LINES: usize = 3;

/// Name, titles and optional delegated authority of a signatory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatoryProfile {
    /// Lookup key used on the command line ("vice-mayor")
    pub key: String,
    /// Full name as printed (upper-cased at render time)
    pub name: String,
    /// Up to three title lines
    pub titles: Vec<String>,
    /// Delegation lines printed under the titles ("By authority of ...")
    pub authority: Vec<String>,
}

impl SignatoryProfile {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a title line
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.titles.push(title.into());
        self
    }

    /// Append an authority line
    pub fn with_authority(mut self, line: impl Into<String>) -> Self {
        self.authority.push(line.into());
        self
    }

    /// Title lines that are actually printed
    pub fn printed_titles(&self) -> &[String] {
        let end = self.titles.len().min(MAX_TITLE_LINES);
        &self.titles[..end]
    }
}
