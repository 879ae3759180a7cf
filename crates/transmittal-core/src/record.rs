//! Default substitution for document records
//!
//! Every optional field of a [`DocumentRecord`] is resolved here, once, to
//! the text that gets printed. Absent or blank fields become `"N/A"`.

use tracing::warn;
use transmittal_ast::{DocumentRecord, Recipient, NOT_AVAILABLE};

/// A document record with every printed field filled in
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecord {
    pub no: String,
    /// Display label of the document type ("Ordinance")
    pub kind: String,
    pub title: String,
    pub committee_sponsor: String,
    pub recipients: Vec<Recipient>,
}

impl ResolvedRecord {
    pub fn resolve(record: &DocumentRecord) -> Self {
        Self {
            no: or_na("no", record.no.as_deref()),
            kind: match record.kind() {
                Some(kind) if !kind.label().is_empty() => kind.label().to_string(),
                _ => or_na("document_type", None),
            },
            title: or_na("title", record.title.as_deref()),
            committee_sponsor: or_na("committee_sponsor", record.committee_sponsor.as_deref()),
            recipients: record.transmitted_recipients.clone(),
        }
    }
}

fn or_na(field: &str, value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_string(),
        None => {
            warn!("Document field `{}` is missing, printing {}", field, NOT_AVAILABLE);
            NOT_AVAILABLE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_all_na() {
        let resolved = ResolvedRecord::resolve(&DocumentRecord::new());
        assert_eq!(resolved.no, "N/A");
        assert_eq!(resolved.kind, "N/A");
        assert_eq!(resolved.title, "N/A");
        assert_eq!(resolved.committee_sponsor, "N/A");
        assert!(resolved.recipients.is_empty());
    }

    #[test]
    fn test_fields_are_trimmed_and_labelled() {
        let record = DocumentRecord {
            no: Some(" 2024-017 ".to_string()),
            document_type: Some("ordinance".to_string()),
            title: Some("An Ordinance Regulating Tricycle Fares".to_string()),
            committee_sponsor: Some("".to_string()),
            ..Default::default()
        };
        let resolved = ResolvedRecord::resolve(&record);
        assert_eq!(resolved.no, "2024-017");
        assert_eq!(resolved.kind, "Ordinance");
        assert_eq!(resolved.title, "An Ordinance Regulating Tricycle Fares");
        assert_eq!(resolved.committee_sponsor, "N/A");
    }

    #[test]
    fn test_blank_document_type_is_na() {
        let record = DocumentRecord {
            document_type: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(ResolvedRecord::resolve(&record).kind, "N/A");
    }
}
