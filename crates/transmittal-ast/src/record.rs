//! Document record definitions
//!
//! A `DocumentRecord` is the legislative document as delivered by the REST
//! API. Every field is optional: the API omits what it does not know, and
//! composition substitutes `"N/A"` for whatever is missing.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// A legislative document awaiting transmittal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentRecord {
    /// Identifying number (the API sends either a string or a number)
    #[serde(deserialize_with = "string_or_number")]
    pub no: Option<String>,
    /// Raw document type ("ordinance", "Resolution", ...)
    pub document_type: Option<String>,
    /// Document title
    pub title: Option<String>,
    /// Sponsoring committee
    pub committee_sponsor: Option<String>,
    /// Approval date as sent by the API (usually `YYYY-MM-DD`)
    pub date_approved: Option<String>,
    /// Offices the document is transmitted to, in display order
    pub transmitted_recipients: Vec<Recipient>,
}

impl DocumentRecord {
    /// Create an empty record (every field absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed document kind, if a type was given
    pub fn kind(&self) -> Option<DocumentKind> {
        self.document_type.as_deref().map(DocumentKind::parse)
    }
}

/// A recipient office of the transmittal
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipient {
    /// Persisted identifier, `None` for entries not yet saved
    pub id: Option<i64>,
    /// Name of the addressee
    pub name: Option<String>,
    /// Designation or office
    pub designation: Option<String>,
    /// Postal address
    pub address: Option<String>,
}

impl Recipient {
    /// Create an unsaved recipient with only a designation
    pub fn with_designation(designation: impl Into<String>) -> Self {
        Self {
            designation: Some(designation.into()),
            ..Default::default()
        }
    }

    /// The office line shown in the recipient table
    ///
    /// Falls back to the addressee's name when no designation is recorded.
    pub fn office(&self) -> Option<&str> {
        non_blank(self.designation.as_deref()).or_else(|| non_blank(self.name.as_deref()))
    }
}

/// Kind of legislative document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    Ordinance,
    Resolution,
    Motion,
    /// Any other type, kept verbatim
    Other(String),
}

impl DocumentKind {
    /// Parse a raw document type, ignoring case and surrounding whitespace
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "ordinance" => Self::Ordinance,
            "resolution" => Self::Resolution,
            "motion" => Self::Motion,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Label used in running text ("Ordinance", "Resolution", ...)
    pub fn label(&self) -> &str {
        match self {
            Self::Ordinance => "Ordinance",
            Self::Resolution => "Resolution",
            Self::Motion => "Motion",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Accept `"12"`, `12`, `12.0` or `null` for a document number
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, a number or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if v.fract() == 0.0 {
                Ok(Some(format!("{}", v as i64)))
            } else {
                Ok(Some(v.to_string()))
            }
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(NumberVisitor)
        }
    }

    deserializer.deserialize_any(NumberVisitor)
}
