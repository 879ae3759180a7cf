//! Composition tests over JSON records as the API delivers them

use transmittal_ast::{plain_text, DocumentRecord, RunStyle};
use transmittal_core::test_utils::fixed_clock;
use transmittal_core::{RecipientTable, Renderer, Settings, TransmittalLayout, TransmittalRequest};

fn compose_json(json: &str, signatory: &str) -> TransmittalLayout {
    let record: DocumentRecord = serde_json::from_str(json).unwrap();
    let settings = Settings::default();
    let profile = settings.signatory(signatory).unwrap();
    let request = TransmittalRequest::new(&record, profile, fixed_clock());
    TransmittalLayout::compose(&request, &settings)
}

#[test]
fn empty_object_composes_with_placeholders() {
    let layout = compose_json("{}", "secretary");

    assert_eq!(layout.heading, "TRANSMITTAL SHEET");
    assert_eq!(layout.title_box, "N/A");
    assert_eq!(layout.file_name("docx"), "Transmittal_Sheet_N/A.docx");
    assert_eq!(layout.recipient_table(Renderer::Docx), RecipientTable::Empty);
    assert!(plain_text(&layout.body).contains("N/A day of"));
}

#[test]
fn numeric_document_number() {
    let layout = compose_json(r#"{"no": 45, "document_type": "Resolution"}"#, "secretary");
    assert_eq!(layout.document_no, "45");
    assert!(plain_text(&layout.body).contains("Resolution No. 45"));
}

#[test]
fn teen_days_use_th() {
    let layout = compose_json(
        r#"{"no": "7", "document_type": "motion", "date_approved": "2023-11-12"}"#,
        "secretary",
    );
    let text = plain_text(&layout.body);
    assert!(text.contains("12th day of November 2023"));
    assert!(layout
        .body
        .iter()
        .any(|r| r.text == "th" && matches!(r.style, RunStyle::Superscript { .. })));
}

#[test]
fn malformed_date_falls_back() {
    let layout = compose_json(r#"{"date_approved": "sometime in May"}"#, "secretary");
    assert!(layout.body.iter().all(|r| !r.is_superscript()));
    assert!(plain_text(&layout.body).contains("held on the N/A day of, entitled:"));
}

#[test]
fn authority_lines_follow_titles() {
    let layout = compose_json("{}", "mayor");
    assert_eq!(layout.signatory.name, "ANA VICTORIA CRUZ");
    assert_eq!(layout.signatory.titles, vec!["City Mayor"]);
    assert_eq!(layout.signatory.authority, vec!["By authority of the City Mayor:"]);
}

#[test]
fn unknown_fields_are_ignored() {
    let layout = compose_json(
        r#"{"no": "1", "status": "approved", "transmitted_recipients": [{"designation": "Budget Office", "extra": true}]}"#,
        "secretary",
    );
    assert_eq!(layout.recipients.len(), 1);
}
