//! Configuration settings
//!
//! Read from `transmittal.toml`. Every table is optional; anything left out
//! falls back to the defaults below, so the tool works without a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use transmittal_ast::signatory::MAX_TITLE_LINES;
use transmittal_ast::SignatoryProfile;

use crate::assets::LogoSlot;
use crate::error::{CoreError, Result};

/// Default settings file name
pub const SETTINGS_FILE: &str = "transmittal.toml";

/// Narrowest designation column that still shows text before the ellipsis
pub const MIN_DESIGNATION_WIDTH: usize = 4;

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Issuing office
    pub agency: AgencySettings,
    /// Letterhead images and fonts
    pub assets: AssetSettings,
    /// Typography and table widths
    pub layout: LayoutSettings,
    /// The fixed set of signatories a caller may pick from
    pub signatories: Vec<SignatoryProfile>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            agency: AgencySettings::default(),
            assets: AssetSettings::default(),
            layout: LayoutSettings::default(),
            signatories: default_signatories(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject settings the composer cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.signatories.is_empty() {
            return Err(CoreError::InvalidSettings(
                "at least one signatory is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for profile in &self.signatories {
            if profile.key.trim().is_empty() {
                return Err(CoreError::InvalidSettings(format!(
                    "signatory {:?} has no key",
                    profile.name
                )));
            }
            if !seen.insert(profile.key.as_str()) {
                return Err(CoreError::InvalidSettings(format!(
                    "duplicate signatory key {:?}",
                    profile.key
                )));
            }
            if profile.titles.len() > MAX_TITLE_LINES {
                return Err(CoreError::InvalidSettings(format!(
                    "signatory {:?} has {} title lines, at most {} are printed",
                    profile.key,
                    profile.titles.len(),
                    MAX_TITLE_LINES
                )));
            }
        }

        let widths = [
            ("designation_width_pdf", self.layout.designation_width_pdf),
            ("designation_width_docx", self.layout.designation_width_docx),
        ];
        for (name, width) in widths {
            if width < MIN_DESIGNATION_WIDTH {
                return Err(CoreError::InvalidSettings(format!(
                    "{} is {}, must be at least {}",
                    name, width, MIN_DESIGNATION_WIDTH
                )));
            }
        }

        Ok(())
    }

    /// Look up a signatory profile by key
    pub fn signatory(&self, key: &str) -> Result<&SignatoryProfile> {
        self.signatories
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| CoreError::UnknownSignatory(key.to_string()))
    }
}

/// Issuing office text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgencySettings {
    /// Centered title block under the logos
    pub lines: Vec<String>,
    /// Opening line of the letter
    pub salutation: String,
    /// Body that approved the document
    pub council: String,
}

impl Default for AgencySettings {
    fn default() -> Self {
        Self {
            lines: vec![
                "Republic of the Philippines".to_string(),
                "City Government".to_string(),
                "OFFICE OF THE SANGGUNIANG PANLUNGSOD".to_string(),
            ],
            salutation: "Sir/Madam:".to_string(),
            council: "Sangguniang Panlungsod".to_string(),
        }
    }
}

/// Letterhead image locations and font files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory holding the logos, relative to the settings file
    pub dir: PathBuf,
    pub outer_left: String,
    pub inner_left: String,
    pub inner_right: String,
    pub outer_right: String,
    /// Font files handed to the PDF compiler
    pub fonts: Vec<PathBuf>,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
            outer_left: "city-seal.png".to_string(),
            inner_left: "council-seal.png".to_string(),
            inner_right: "bagong-pilipinas.png".to_string(),
            outer_right: "city-brand.png".to_string(),
            fonts: Vec::new(),
        }
    }
}

impl AssetSettings {
    /// File name configured for a header slot
    pub fn logo(&self, slot: LogoSlot) -> &str {
        match slot {
            LogoSlot::OuterLeft => &self.outer_left,
            LogoSlot::InnerLeft => &self.inner_left,
            LogoSlot::InnerRight => &self.inner_right,
            LogoSlot::OuterRight => &self.outer_right,
        }
    }
}

/// Typography and table settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub font_family: String,
    /// Office text width in the PDF recipient table, in characters
    pub designation_width_pdf: usize,
    /// Office text width in the DOCX recipient table, in characters
    pub designation_width_docx: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            designation_width_pdf: 45,
            designation_width_docx: 55,
        }
    }
}

fn default_signatories() -> Vec<SignatoryProfile> {
    vec![
        SignatoryProfile::new("secretary", "Maria Lourdes Santos")
            .with_title("Secretary to the Sangguniang Panlungsod"),
        SignatoryProfile::new("vice-mayor", "Jose Antonio Reyes")
            .with_title("City Vice Mayor")
            .with_title("Presiding Officer"),
        SignatoryProfile::new("mayor", "Ana Victoria Cruz")
            .with_title("City Mayor")
            .with_authority("By authority of the City Mayor:"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.signatories.len(), 3);
        assert_eq!(settings.agency.lines.len(), 3);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.layout.font_family, "Times New Roman");
        assert!(settings.signatory("vice-mayor").is_ok());
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_toml_str(
            r#"
[agency]
lines = ["Republic of the Philippines", "Province of Bukidnon", "City of Valencia"]

[layout]
designation_width_pdf = 30

[[signatories]]
key = "acting"
name = "Pedro Garcia"
titles = ["Acting Secretary"]
authority = ["For the Secretary:"]
"#,
        )
        .unwrap();

        assert_eq!(settings.agency.lines[2], "City of Valencia");
        assert_eq!(settings.agency.salutation, "Sir/Madam:");
        assert_eq!(settings.layout.designation_width_pdf, 30);
        assert_eq!(settings.layout.designation_width_docx, 55);
        assert_eq!(settings.signatories.len(), 1);
        assert_eq!(settings.signatory("acting").unwrap().authority.len(), 1);
    }

    #[test]
    fn test_unknown_signatory() {
        let err = Settings::default().signatory("governor").unwrap_err();
        assert!(matches!(err, CoreError::UnknownSignatory(ref k) if k == "governor"));
    }

    #[test]
    fn test_rejects_too_many_titles() {
        let err = Settings::from_toml_str(
            r#"
[[signatories]]
key = "x"
name = "X"
titles = ["a", "b", "c", "d"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let err = Settings::from_toml_str(
            r#"
[[signatories]]
key = "x"
name = "X"

[[signatories]]
key = "x"
name = "Y"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_narrow_designation_width() {
        let err = Settings::from_toml_str("[layout]\ndesignation_width_docx = 3\n").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
        assert!(err.to_string().contains("designation_width_docx"));

        let settings = Settings::from_toml_str("[layout]\ndesignation_width_pdf = 4\n").unwrap();
        assert_eq!(settings.layout.designation_width_pdf, MIN_DESIGNATION_WIDTH);
    }

    #[test]
    fn test_malformed_toml() {
        let err = Settings::from_toml_str("[agency\nlines = 3").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "[assets]\ndir = \"logos\"\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.assets.dir, PathBuf::from("logos"));
        assert_eq!(settings.assets.logo(LogoSlot::OuterRight), "city-brand.png");
    }
}
