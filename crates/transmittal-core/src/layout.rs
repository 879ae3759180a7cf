//! Shared page layout
//!
//! [`TransmittalLayout`] is the single declarative description of a
//! transmittal sheet. The PDF transpiler and the DOCX writer both render
//! from it, so text, geometry and type sizes cannot drift between formats.
//!
//! Geometry is in millimeters measured from the top-left corner of the
//! page; type sizes are in points.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;
use transmittal_ast::{DocumentRecord, Recipient, SessionDate, SignatoryProfile, StyledRun};

use crate::assets::LogoSlot;
use crate::config::Settings;
use crate::date::{generated_at_text, issued_on_text, session_date};
use crate::recipients::RecipientTable;
use crate::record::ResolvedRecord;
use crate::runs::{RunSplitter, SuffixMarker};

/// Centered heading of every sheet
pub const HEADING: &str = "TRANSMITTAL SHEET";

/// Paragraphs between the title box and the signatory block
pub const CLOSING: [&str; 2] = ["for your information.", "Thank you very much."];

/// File name of a rendered sheet: `Transmittal_Sheet_<no>.<ext>`
pub fn output_file_name(no: &str, extension: &str) -> String {
    format!("Transmittal_Sheet_{}.{}", no, extension)
}

/// Page size and margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_left_mm: f64,
    pub margin_right_mm: f64,
    pub margin_top_mm: f64,
    pub margin_bottom_mm: f64,
}

impl PageGeometry {
    /// Folio (216mm x 330mm) with the municipal letter margins
    pub const FOLIO: PageGeometry = PageGeometry {
        width_mm: 216.0,
        height_mm: 330.0,
        margin_left_mm: 38.1,
        margin_right_mm: 25.4,
        margin_top_mm: 20.0,
        margin_bottom_mm: 15.0,
    };

    /// Width available between the side margins
    pub fn content_width_mm(&self) -> f64 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Horizontal center of the content area, where centered text sits
    pub fn content_center_mm(&self) -> f64 {
        self.margin_left_mm + self.content_width_mm() / 2.0
    }
}

/// A logo at a fixed position on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPlacement {
    pub slot: LogoSlot,
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Logo size, square
const LOGO_SIZE_MM: f64 = 24.0;

/// Top edge of the logo row
const LOGO_TOP_MM: f64 = 8.0;

/// Distance from the content center to the outer edge of an outer logo
const OUTER_LOGO_REACH_MM: f64 = 96.0;

/// Distance from the content center to the outer edge of an inner logo
const INNER_LOGO_REACH_MM: f64 = 68.0;

/// Space between the logo row and the agency title block
const HEADER_GAP_MM: f64 = 4.0;

/// The logo row, symmetric about the content center so it lines up with
/// the centered title block
fn logo_placements(page: &PageGeometry) -> Vec<LogoPlacement> {
    let center = page.content_center_mm();
    let x_positions = [
        (LogoSlot::OuterLeft, center - OUTER_LOGO_REACH_MM),
        (LogoSlot::InnerLeft, center - INNER_LOGO_REACH_MM),
        (LogoSlot::InnerRight, center + INNER_LOGO_REACH_MM - LOGO_SIZE_MM),
        (LogoSlot::OuterRight, center + OUTER_LOGO_REACH_MM - LOGO_SIZE_MM),
    ];

    x_positions
        .into_iter()
        .map(|(slot, x_mm)| LogoPlacement {
            slot,
            x_mm,
            y_mm: LOGO_TOP_MM,
            width_mm: LOGO_SIZE_MM,
            height_mm: LOGO_SIZE_MM,
        })
        .collect()
}

/// sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Uppercase hex without the leading `#` ("1F3C88")
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Decorative rule under the header
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Solid { color: Rgb, thickness_pt: f64 },
    /// Three-color horizontal gradient, left to right
    Gradient { stops: [Rgb; 3], thickness_pt: f64 },
}

impl Rule {
    pub fn thickness_pt(&self) -> f64 {
        match self {
            Rule::Solid { thickness_pt, .. } | Rule::Gradient { thickness_pt, .. } => *thickness_pt,
        }
    }
}

fn header_rules() -> [Rule; 2] {
    [
        Rule::Solid {
            color: Rgb::BLACK,
            thickness_pt: 1.5,
        },
        Rule::Gradient {
            stops: [Rgb(0x1F, 0x3C, 0x88), Rgb(0xF2, 0xC2, 0x30), Rgb(0xC0, 0x39, 0x2B)],
            thickness_pt: 3.0,
        },
    ]
}

/// Type sizes in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub agency_pt: f64,
    pub heading_pt: f64,
    pub body_pt: f64,
    pub title_box_pt: f64,
    pub signatory_name_pt: f64,
    pub signatory_title_pt: f64,
    pub table_pt: f64,
    pub footer_pt: f64,
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            agency_pt: 11.0,
            heading_pt: 14.0,
            body_pt: 12.0,
            title_box_pt: 12.0,
            signatory_name_pt: 12.0,
            signatory_title_pt: 11.0,
            table_pt: 10.0,
            footer_pt: 8.0,
        }
    }
}

/// Signatory lines, all centered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatoryBlock {
    /// Upper-cased, printed bold
    pub name: String,
    pub titles: Vec<String>,
    pub authority: Vec<String>,
}

impl SignatoryBlock {
    pub fn from_profile(profile: &SignatoryProfile) -> Self {
        Self {
            name: profile.name.trim().to_uppercase(),
            titles: profile.printed_titles().to_vec(),
            authority: profile.authority.clone(),
        }
    }
}

/// Target format, for renderer-specific table widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Pdf,
    Docx,
}

/// Everything one composition needs, with the clock injected
#[derive(Debug, Clone)]
pub struct TransmittalRequest<'a> {
    pub record: &'a DocumentRecord,
    pub signatory: &'a SignatoryProfile,
    /// Date printed under the heading
    pub issued_on: NaiveDate,
    /// Timestamp printed in the footer
    pub generated_at: NaiveDateTime,
    pub session_date: SessionDate,
}

impl<'a> TransmittalRequest<'a> {
    /// Build a request issued on the day of `generated_at`, deriving the
    /// session date from the record
    pub fn new(
        record: &'a DocumentRecord,
        signatory: &'a SignatoryProfile,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            record,
            signatory,
            issued_on: generated_at.date(),
            generated_at,
            session_date: session_date(record.date_approved.as_deref()),
        }
    }
}

/// The complete, renderer-neutral transmittal sheet
#[derive(Debug, Clone, PartialEq)]
pub struct TransmittalLayout {
    pub page: PageGeometry,
    pub font_family: String,
    pub fonts: FontScale,
    pub logos: Vec<LogoPlacement>,
    /// Top of the agency title block, below the logo row
    pub agency_top_mm: f64,
    /// Centered title block; the last line is printed bold
    pub agency_lines: Vec<String>,
    pub rules: [Rule; 2],
    pub heading: String,
    pub issued_on: String,
    pub salutation: String,
    pub body: Vec<StyledRun>,
    /// Record title, upper-cased, printed in a bordered box
    pub title_box: String,
    pub closing: Vec<String>,
    pub signatory: SignatoryBlock,
    pub recipients: Vec<Recipient>,
    pub designation_width_pdf: usize,
    pub designation_width_docx: usize,
    pub footer: String,
    pub document_no: String,
}

impl TransmittalLayout {
    /// Lay out a transmittal sheet
    pub fn compose(request: &TransmittalRequest<'_>, settings: &Settings) -> Self {
        let record = ResolvedRecord::resolve(request.record);
        let body = body_runs(&record, &request.session_date, &settings.agency.council);
        debug!(
            "Composed body of {} runs for {} No. {}",
            body.len(),
            record.kind,
            record.no
        );

        Self {
            page: PageGeometry::FOLIO,
            font_family: settings.layout.font_family.clone(),
            fonts: FontScale::default(),
            logos: logo_placements(&PageGeometry::FOLIO),
            agency_top_mm: LOGO_TOP_MM + LOGO_SIZE_MM + HEADER_GAP_MM,
            agency_lines: settings.agency.lines.clone(),
            rules: header_rules(),
            heading: HEADING.to_string(),
            issued_on: issued_on_text(request.issued_on),
            salutation: settings.agency.salutation.clone(),
            body,
            title_box: record.title.to_uppercase(),
            closing: CLOSING.iter().map(|s| s.to_string()).collect(),
            signatory: SignatoryBlock::from_profile(request.signatory),
            recipients: record.recipients,
            designation_width_pdf: settings.layout.designation_width_pdf,
            designation_width_docx: settings.layout.designation_width_docx,
            footer: format!("Generated on: {}", generated_at_text(request.generated_at)),
            document_no: record.no,
        }
    }

    /// Recipient rows sized for a renderer
    pub fn recipient_table(&self, renderer: Renderer) -> RecipientTable {
        let width = match renderer {
            Renderer::Pdf => self.designation_width_pdf,
            Renderer::Docx => self.designation_width_docx,
        };
        RecipientTable::build(&self.recipients, width)
    }

    /// Download name for a given extension
    pub fn file_name(&self, extension: &str) -> String {
        output_file_name(&self.document_no, extension)
    }
}

/// Build the main paragraph with its bold phrases and raised suffix
fn body_runs(record: &ResolvedRecord, date: &SessionDate, council: &str) -> Vec<StyledRun> {
    let document_phrase = format!("{} No. {}", record.kind, record.no);
    let date_phrase = format!(
        "{} day of {} {}",
        date.ordinal_text(),
        date.month_text(),
        date.year_text()
    )
    .trim_end()
    .to_string();

    let template = format!(
        "Respectfully transmitting herewith a copy of {}, sponsored by {}, which was approved by the {} during its Regular Session held on the {}, entitled:",
        document_phrase, record.committee_sponsor, council, date_phrase
    );

    let year = date.year_text();
    RunSplitter::new()
        .bold(document_phrase)
        .bold(date_phrase)
        .bold(date.month_text())
        .bold(year)
        .with_marker(SuffixMarker::from_session(date))
        .split(&template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_clock, sample_record};
    use transmittal_ast::{plain_text, RunStyle};

    fn compose(record: &DocumentRecord) -> TransmittalLayout {
        let settings = Settings::default();
        let signatory = settings.signatory("vice-mayor").unwrap().clone();
        let request = TransmittalRequest::new(record, &signatory, fixed_clock());
        TransmittalLayout::compose(&request, &settings)
    }

    #[test]
    fn test_body_text_and_styles() {
        let layout = compose(&sample_record());
        let text = plain_text(&layout.body);
        assert!(text.starts_with("Respectfully transmitting herewith a copy of Ordinance No. 2024-017,"));
        assert!(text.contains("held on the 21st day of January 2024, entitled:"));

        assert!(layout.body.contains(&StyledRun::bold("Ordinance No. 2024-017")));
        assert!(layout.body.contains(&StyledRun::bold("21")));
        assert!(layout
            .body
            .iter()
            .any(|r| r.text == "st" && r.style == RunStyle::Superscript { bold: true }));
    }

    #[test]
    fn test_empty_record_renders_na() {
        let layout = compose(&DocumentRecord::new());
        let text = plain_text(&layout.body);
        assert!(text.contains("N/A No. N/A"));
        assert!(text.contains("sponsored by N/A"));
        assert!(text.contains("held on the N/A day of, entitled:"));
        assert!(layout.body.iter().all(|r| !r.is_superscript()));
        assert_eq!(layout.title_box, "N/A");
        assert_eq!(layout.document_no, "N/A");
        assert_eq!(layout.file_name("pdf"), "Transmittal_Sheet_N/A.pdf");
        assert!(layout.recipient_table(Renderer::Pdf).is_empty());
    }

    #[test]
    fn test_title_box_is_uppercase() {
        let layout = compose(&sample_record());
        assert_eq!(
            layout.title_box,
            "AN ORDINANCE REGULATING TRICYCLE FARES WITHIN THE CITY"
        );
    }

    #[test]
    fn test_signatory_block() {
        let layout = compose(&sample_record());
        assert_eq!(layout.signatory.name, "JOSE ANTONIO REYES");
        assert_eq!(layout.signatory.titles, vec!["City Vice Mayor", "Presiding Officer"]);
        assert!(layout.signatory.authority.is_empty());
    }

    #[test]
    fn test_clock_is_injected() {
        let layout = compose(&sample_record());
        assert_eq!(layout.issued_on, "January 25, 2024");
        assert_eq!(layout.footer, "Generated on: 1/25/2024, 2:30:00 PM");
    }

    #[test]
    fn test_composition_is_deterministic() {
        let record = sample_record();
        assert_eq!(compose(&record), compose(&record));
    }

    #[test]
    fn test_logos_fit_the_page() {
        let layout = compose(&sample_record());
        assert_eq!(layout.logos.len(), 4);
        for logo in &layout.logos {
            assert!(logo.x_mm >= 0.0);
            assert!(logo.x_mm + logo.width_mm <= layout.page.width_mm);
        }
        assert_eq!(layout.logos[0].slot, LogoSlot::OuterLeft);
        assert_eq!(layout.logos[3].slot, LogoSlot::OuterRight);
    }

    #[test]
    fn test_logos_clear_the_agency_block() {
        let layout = compose(&sample_record());
        let page = layout.page;
        assert!(layout.agency_top_mm >= page.margin_top_mm);
        for logo in &layout.logos {
            assert!(
                logo.y_mm + logo.height_mm < layout.agency_top_mm,
                "{:?} reaches into the title block",
                logo.slot
            );
        }
    }

    #[test]
    fn test_logo_row_is_centered_on_content() {
        let layout = compose(&sample_record());
        let center = layout.page.content_center_mm();
        let left = layout.logos[0].x_mm;
        let right = layout.logos[3].x_mm + layout.logos[3].width_mm;
        assert!(((left + right) / 2.0 - center).abs() < 1e-9);

        let inner_left = &layout.logos[1];
        let inner_right = &layout.logos[2];
        let gap_left = center - (inner_left.x_mm + inner_left.width_mm);
        let gap_right = inner_right.x_mm - center;
        assert!((gap_left - gap_right).abs() < 1e-9);
    }

    #[test]
    fn test_recipient_widths_per_renderer() {
        let mut record = sample_record();
        record.transmitted_recipients = vec![Recipient::with_designation("x".repeat(50))];
        let layout = compose(&record);
        let RecipientTable::Rows(pdf) = layout.recipient_table(Renderer::Pdf) else {
            panic!("expected rows");
        };
        let RecipientTable::Rows(docx) = layout.recipient_table(Renderer::Docx) else {
            panic!("expected rows");
        };
        assert_eq!(pdf[0].office.chars().count(), 45);
        assert_eq!(docx[0].office.chars().count(), 50);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb(0x1F, 0x3C, 0x88).hex(), "1F3C88");
    }
}
