//! DOCX writer
//!
//! Translates a [`TransmittalLayout`] into WordprocessingML. The page uses a
//! zero top margin, so the header zone is positioned with paragraph spacing
//! and page-relative anchors instead.

use tracing::{debug, info};
use transmittal_ast::{RunStyle, StyledRun};
use transmittal_core::units::{
    mm_to_emu, mm_to_twips, pt_to_half_points, pt_to_mm, pt_to_twips, px_to_twips, round,
};
use transmittal_core::{
    AssetBundle, LogoPlacement, RecipientRow, RecipientTable, Renderer, Rgb, Rule,
    TransmittalLayout, NO_RECIPIENTS, SIGNING_CAPTIONS,
};

use crate::archive::{OoxmlArchive, DOCUMENT_PART};
use crate::error::Result;
use crate::media::MediaStore;
use crate::package::{
    content_types_xml, core_xml, footer_xml, root_rels_xml, styles_xml, CONTENT_TYPES_PART,
    CORE_PART, DOCUMENT_RELS_PART, FOOTER_PART, ROOT_RELS_PART, STYLES_PART,
};
use crate::relationships::Relationships;
use crate::xml::escape_xml;

/// Body first-line indent
const INDENT_MM: f64 = 12.7;

/// Share of the table width given to the office column
const OFFICE_COLUMN_SHARE: f64 = 0.4;

/// Cell padding, left and right
const CELL_PADDING_PX: f64 = 5.4;

/// Paragraph border width in eighths of a point
const BOX_BORDER_EIGHTHS: i64 = 8;

/// Character formatting of one run
#[derive(Debug, Clone, Copy, Default)]
struct RunFormat {
    bold: bool,
    superscript: bool,
    size_pt: f64,
}

impl RunFormat {
    fn sized(size_pt: f64) -> Self {
        Self {
            size_pt,
            ..Default::default()
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn for_run(run: &StyledRun, size_pt: f64) -> Self {
        let mut format = Self::sized(size_pt);
        match run.style {
            RunStyle::Plain => {}
            RunStyle::Bold => format.bold = true,
            RunStyle::Superscript { bold } => {
                format.bold = bold;
                format.superscript = true;
            }
        }
        format
    }
}

/// Paragraph properties used on the sheet
#[derive(Debug, Clone, Default)]
struct ParagraphProps {
    align: Option<&'static str>,
    before: i64,
    after: i64,
    first_line: i64,
    /// Raw `<w:pBdr>` children
    borders: Option<String>,
}

impl ParagraphProps {
    fn aligned(align: &'static str) -> Self {
        Self {
            align: Some(align),
            ..Default::default()
        }
    }

    fn before(mut self, twips: i64) -> Self {
        self.before = twips;
        self
    }

    fn after(mut self, twips: i64) -> Self {
        self.after = twips;
        self
    }
}

/// DOCX writer for transmittal layouts
pub struct DocxWriter {
    /// XML output buffer
    output: String,
    /// Document relationships (word/_rels/document.xml.rels)
    relationships: Relationships,
    /// Embedded logos
    media: MediaStore,
    /// Next drawing ID for docPr
    next_drawing_id: usize,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            relationships: Relationships::new(),
            media: MediaStore::new(),
            next_drawing_id: 1,
        }
    }

    /// Render a layout to DOCX bytes
    pub fn generate(layout: &TransmittalLayout, assets: &AssetBundle) -> Result<Vec<u8>> {
        let archive = Self::new().build_package(layout, assets)?;
        let bytes = archive.to_bytes()?;
        info!("Wrote DOCX package ({} bytes)", bytes.len());
        Ok(bytes)
    }

    /// Assemble every part of the package
    ///
    /// Fails before writing anything when a logo is missing.
    pub fn build_package(
        mut self,
        layout: &TransmittalLayout,
        assets: &AssetBundle,
    ) -> Result<OoxmlArchive> {
        assets.ensure_complete()?;

        self.relationships.add("styles.xml", Relationships::TYPE_STYLES);
        let footer_id = self.relationships.add("footer1.xml", Relationships::TYPE_FOOTER);

        let document = self.generate_document_xml(layout, assets, &footer_id)?;

        let mut archive = OoxmlArchive::new();
        archive.set_string(CONTENT_TYPES_PART, content_types_xml(self.media.extensions()));
        archive.set_string(ROOT_RELS_PART, root_rels_xml());
        archive.set_string(DOCUMENT_PART, document);
        archive.set_string(DOCUMENT_RELS_PART, self.relationships.to_xml());
        archive.set_string(
            STYLES_PART,
            styles_xml(&layout.font_family, half_points(layout.fonts.body_pt)),
        );
        archive.set_string(
            FOOTER_PART,
            footer_xml(&layout.footer, half_points(layout.fonts.footer_pt)),
        );
        archive.set_string(
            CORE_PART,
            core_xml(
                &format!("Transmittal Sheet {}", layout.document_no),
                layout.agency_lines.last().map(String::as_str).unwrap_or_default(),
            ),
        );
        for (path, bytes) in self.media.files() {
            archive.set(path.clone(), bytes.clone());
        }

        debug!("Assembled {} package parts", archive.file_list().len());
        Ok(archive)
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(
        &mut self,
        layout: &TransmittalLayout,
        assets: &AssetBundle,
        footer_id: &str,
    ) -> Result<String> {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(r#"<w:document "#);
        self.output
            .push_str(r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#);
        self.output.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        self.output.push_str(
            r#"xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" "#,
        );
        self.output
            .push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        self.output
            .push_str(r#"xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture" "#);
        self.output.push_str(
            r#"xmlns:wps="http://schemas.microsoft.com/office/word/2010/wordprocessingShape" "#,
        );
        self.output.push_str(
            r#"xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        self.generate_header(layout, assets)?;
        self.generate_rules(layout);
        self.generate_letter(layout);
        self.generate_signatory(layout);
        self.generate_recipient_table(layout);
        self.generate_section(layout, footer_id);

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        Ok(std::mem::take(&mut self.output))
    }

    /// Logos and the agency title block
    ///
    /// The logos are anchored to the page in the first agency paragraph,
    /// whose spacing stands in for the top margin and clears the logo row.
    fn generate_header(&mut self, layout: &TransmittalLayout, assets: &AssetBundle) -> Result<()> {
        let size = layout.fonts.agency_pt;
        let last = layout.agency_lines.len().saturating_sub(1);

        let mut logo_runs = String::new();
        for placement in &layout.logos {
            let image = assets.require(placement.slot)?;
            let rel_id = self.media.embed(image, &mut self.relationships);
            logo_runs.push_str(&self.anchored_logo(placement, &rel_id));
        }

        if layout.agency_lines.is_empty() {
            let props = ParagraphProps::aligned("center").before(twips(layout.agency_top_mm));
            self.open_paragraph(&props);
            self.output.push_str(&logo_runs);
            self.output.push_str("</w:p>\n");
            return Ok(());
        }

        for (i, line) in layout.agency_lines.iter().enumerate() {
            let mut props = ParagraphProps::aligned("center");
            let mut format = RunFormat::sized(size);
            if i == 0 {
                props = props.before(twips(layout.agency_top_mm));
            }
            if i == last {
                format = format.bold();
            }

            self.open_paragraph(&props);
            if i == 0 {
                self.output.push_str(&logo_runs);
            }
            self.push_run(line, format);
            self.output.push_str("</w:p>\n");
        }

        Ok(())
    }

    fn anchored_logo(&mut self, placement: &LogoPlacement, rel_id: &str) -> String {
        let id = self.next_drawing_id;
        self.next_drawing_id += 1;

        let x = round(mm_to_emu(placement.x_mm));
        let y = round(mm_to_emu(placement.y_mm));
        let cx = round(mm_to_emu(placement.width_mm));
        let cy = round(mm_to_emu(placement.height_mm));

        format!(
            r#"<w:r><w:drawing><wp:anchor distT="0" distB="0" distL="0" distR="0" simplePos="0" relativeHeight="{id}" behindDoc="0" locked="1" layoutInCell="1" allowOverlap="1"><wp:simplePos x="0" y="0"/><wp:positionH relativeFrom="page"><wp:posOffset>{x}</wp:posOffset></wp:positionH><wp:positionV relativeFrom="page"><wp:posOffset>{y}</wp:posOffset></wp:positionV><wp:extent cx="{cx}" cy="{cy}"/><wp:effectExtent l="0" t="0" r="0" b="0"/><wp:wrapNone/><wp:docPr id="{id}" name="{name}"/><wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic><pic:nvPicPr><pic:cNvPr id="{id}" name="{name}"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:anchor></w:drawing></w:r>"#,
            id = id,
            x = x,
            y = y,
            cx = cx,
            cy = cy,
            name = placement.slot.id(),
            rel_id = escape_xml(rel_id),
        )
    }

    /// The solid and gradient rules under the header
    fn generate_rules(&mut self, layout: &TransmittalLayout) {
        for (i, rule) in layout.rules.iter().enumerate() {
            let before = if i == 0 { pt_twips(6.0) } else { pt_twips(2.0) };
            match rule {
                Rule::Solid {
                    color,
                    thickness_pt,
                } => {
                    let props = ParagraphProps {
                        before,
                        borders: Some(format!(
                            r#"<w:bottom w:val="single" w:sz="{}" w:space="1" w:color="{}"/>"#,
                            round(thickness_pt * 8.0),
                            color.hex()
                        )),
                        ..Default::default()
                    };
                    self.open_paragraph(&props);
                    self.output.push_str("</w:p>\n");
                }
                Rule::Gradient {
                    stops,
                    thickness_pt,
                } => {
                    let width = layout.page.content_width_mm();
                    let props = ParagraphProps::default().before(before);
                    self.open_paragraph(&props);
                    let shape = self.gradient_shape(stops, width, *thickness_pt);
                    self.output.push_str(&shape);
                    self.output.push_str("</w:p>\n");
                }
            }
        }
    }

    fn gradient_shape(&mut self, stops: &[Rgb; 3], width_mm: f64, thickness_pt: f64) -> String {
        let id = self.next_drawing_id;
        self.next_drawing_id += 1;

        let cx = round(mm_to_emu(width_mm));
        let cy = round(mm_to_emu(pt_to_mm(thickness_pt)));
        let positions = [0, 50_000, 100_000];
        let gradient: String = stops
            .iter()
            .zip(positions)
            .map(|(color, pos)| {
                format!(
                    r#"<a:gs pos="{}"><a:srgbClr val="{}"/></a:gs>"#,
                    pos,
                    color.hex()
                )
            })
            .collect();

        format!(
            r#"<w:r><mc:AlternateContent><mc:Choice Requires="wps"><w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{cx}" cy="{cy}"/><wp:effectExtent l="0" t="0" r="0" b="0"/><wp:docPr id="{id}" name="Header rule"/><wp:cNvGraphicFramePr/><a:graphic><a:graphicData uri="http://schemas.microsoft.com/office/word/2010/wordprocessingShape"><wps:wsp><wps:cNvSpPr/><wps:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:gradFill rotWithShape="1"><a:gsLst>{gradient}</a:gsLst><a:lin ang="0" scaled="0"/></a:gradFill><a:ln><a:noFill/></a:ln></wps:spPr><wps:bodyPr/></wps:wsp></a:graphicData></a:graphic></wp:inline></w:drawing></mc:Choice></mc:AlternateContent></w:r>"#,
            cx = cx,
            cy = cy,
            id = id,
            gradient = gradient,
        )
    }

    /// Heading, date, salutation, body, title box and closing
    fn generate_letter(&mut self, layout: &TransmittalLayout) {
        let fonts = layout.fonts;

        self.open_paragraph(&ParagraphProps::aligned("center").before(pt_twips(18.0)));
        self.push_run(&layout.heading, RunFormat::sized(fonts.heading_pt).bold());
        self.output.push_str("</w:p>\n");

        self.open_paragraph(&ParagraphProps::aligned("right").before(pt_twips(12.0)));
        self.push_run(&layout.issued_on, RunFormat::sized(fonts.body_pt));
        self.output.push_str("</w:p>\n");

        self.open_paragraph(&ParagraphProps::default().before(pt_twips(18.0)));
        self.push_run(&layout.salutation, RunFormat::sized(fonts.body_pt));
        self.output.push_str("</w:p>\n");

        let body = ParagraphProps {
            align: Some("both"),
            before: pt_twips(12.0),
            first_line: twips(INDENT_MM),
            ..Default::default()
        };
        self.open_paragraph(&body);
        for run in &layout.body {
            self.push_run(&run.text, RunFormat::for_run(run, fonts.body_pt));
        }
        self.output.push_str("</w:p>\n");

        let border = |side: &str| {
            format!(
                r#"<w:{} w:val="single" w:sz="{}" w:space="4" w:color="000000"/>"#,
                side, BOX_BORDER_EIGHTHS
            )
        };
        let title_box = ParagraphProps {
            align: Some("center"),
            before: pt_twips(12.0),
            after: pt_twips(12.0),
            borders: Some(
                ["top", "left", "bottom", "right"]
                    .into_iter()
                    .map(border)
                    .collect(),
            ),
            ..Default::default()
        };
        self.open_paragraph(&title_box);
        self.push_run(&layout.title_box, RunFormat::sized(fonts.title_box_pt).bold());
        self.output.push_str("</w:p>\n");

        for (i, line) in layout.closing.iter().enumerate() {
            let props = ParagraphProps {
                first_line: if i == 0 { 0 } else { twips(INDENT_MM) },
                before: if i == 0 { 0 } else { pt_twips(12.0) },
                ..Default::default()
            };
            self.open_paragraph(&props);
            self.push_run(line, RunFormat::sized(fonts.body_pt));
            self.output.push_str("</w:p>\n");
        }
    }

    /// Name, titles and authority lines, centered
    fn generate_signatory(&mut self, layout: &TransmittalLayout) {
        let fonts = layout.fonts;
        let block = &layout.signatory;

        self.open_paragraph(&ParagraphProps::aligned("center").before(pt_twips(42.0)));
        self.push_run(&block.name, RunFormat::sized(fonts.signatory_name_pt).bold());
        self.output.push_str("</w:p>\n");

        for line in block.titles.iter().chain(&block.authority) {
            self.open_paragraph(&ParagraphProps::aligned("center"));
            self.push_run(line, RunFormat::sized(fonts.signatory_title_pt));
            self.output.push_str("</w:p>\n");
        }
    }

    /// Office column plus three signing columns, no header row
    fn generate_recipient_table(&mut self, layout: &TransmittalLayout) {
        let table = layout.recipient_table(Renderer::Docx);
        let total = twips(layout.page.content_width_mm());
        let office = round(total as f64 * OFFICE_COLUMN_SHARE);
        let signing = (total - office) / 3;
        let padding = round(px_to_twips(CELL_PADDING_PX));

        self.open_paragraph(&ParagraphProps::default().before(pt_twips(24.0)));
        self.output.push_str("</w:p>\n");

        self.output.push_str("<w:tbl>\n");
        self.output.push_str("<w:tblPr>\n");
        self.output
            .push_str(&format!("<w:tblW w:w=\"{}\" w:type=\"dxa\"/>\n", total));
        self.output.push_str("<w:tblLayout w:type=\"fixed\"/>\n");
        self.output.push_str(&format!(
            "<w:tblCellMar><w:left w:w=\"{p}\" w:type=\"dxa\"/><w:right w:w=\"{p}\" w:type=\"dxa\"/></w:tblCellMar>\n",
            p = padding
        ));
        self.output.push_str("</w:tblPr>\n");

        self.output.push_str("<w:tblGrid>\n");
        self.output
            .push_str(&format!("<w:gridCol w:w=\"{}\"/>\n", office));
        for _ in SIGNING_CAPTIONS {
            self.output
                .push_str(&format!("<w:gridCol w:w=\"{}\"/>\n", signing));
        }
        self.output.push_str("</w:tblGrid>\n");

        match &table {
            RecipientTable::Empty => {
                self.output.push_str("<w:tr>\n<w:tc>\n");
                self.output.push_str(&format!(
                    "<w:tcPr><w:tcW w:w=\"{}\" w:type=\"dxa\"/><w:gridSpan w:val=\"4\"/></w:tcPr>\n",
                    total
                ));
                self.open_paragraph(&ParagraphProps::aligned("center"));
                self.push_run(NO_RECIPIENTS, RunFormat::sized(layout.fonts.table_pt));
                self.output.push_str("</w:p>\n");
                self.output.push_str("</w:tc>\n</w:tr>\n");
            }
            RecipientTable::Rows(rows) => {
                for row in rows {
                    self.generate_recipient_row(row, office, signing, layout);
                }
            }
        }

        self.output.push_str("</w:tbl>\n");
        debug!("Recipient table with {} row(s)", table.row_count());

        self.output.push_str("<w:p/>\n");
    }

    fn generate_recipient_row(
        &mut self,
        row: &RecipientRow,
        office: i64,
        signing: i64,
        layout: &TransmittalLayout,
    ) {
        let fonts = layout.fonts;
        self.output.push_str("<w:tr>\n");
        self.output.push_str("<w:trPr><w:cantSplit/></w:trPr>\n");

        self.output.push_str("<w:tc>\n");
        self.output.push_str(&format!(
            "<w:tcPr><w:tcW w:w=\"{}\" w:type=\"dxa\"/><w:vAlign w:val=\"bottom\"/></w:tcPr>\n",
            office
        ));
        self.open_paragraph(&ParagraphProps::aligned("left").before(pt_twips(12.0)));
        self.push_run(&row.office, RunFormat::sized(fonts.table_pt).bold());
        self.output.push_str("</w:p>\n");
        if let Some(address) = &row.address {
            self.open_paragraph(&ParagraphProps::aligned("left"));
            self.push_run(address, RunFormat::sized(fonts.footer_pt));
            self.output.push_str("</w:p>\n");
        }
        self.output.push_str("</w:tc>\n");

        for caption in SIGNING_CAPTIONS {
            self.output.push_str("<w:tc>\n");
            self.output.push_str(&format!(
                "<w:tcPr><w:tcW w:w=\"{}\" w:type=\"dxa\"/><w:vAlign w:val=\"bottom\"/></w:tcPr>\n",
                signing
            ));
            let line = ParagraphProps {
                before: pt_twips(18.0),
                borders: Some(
                    r#"<w:bottom w:val="single" w:sz="4" w:space="1" w:color="000000"/>"#
                        .to_string(),
                ),
                ..Default::default()
            };
            self.open_paragraph(&line);
            self.output.push_str("</w:p>\n");
            self.open_paragraph(&ParagraphProps::aligned("center"));
            self.push_run(caption, RunFormat::sized(fonts.footer_pt));
            self.output.push_str("</w:p>\n");
            self.output.push_str("</w:tc>\n");
        }

        self.output.push_str("</w:tr>\n");
    }

    /// Folio page, margins and footer reference
    fn generate_section(&mut self, layout: &TransmittalLayout, footer_id: &str) {
        let page = &layout.page;
        self.output.push_str("<w:sectPr>\n");
        self.output.push_str(&format!(
            "<w:footerReference w:type=\"default\" r:id=\"{}\"/>\n",
            escape_xml(footer_id)
        ));
        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>\n",
            twips(page.width_mm),
            twips(page.height_mm)
        ));
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"0\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"0\" w:footer=\"{}\" w:gutter=\"0\"/>\n",
            twips(page.margin_right_mm),
            twips(page.margin_bottom_mm),
            twips(page.margin_left_mm),
            twips(page.margin_bottom_mm / 2.0)
        ));
        self.output.push_str("</w:sectPr>\n");
    }

    fn open_paragraph(&mut self, props: &ParagraphProps) {
        self.output.push_str("<w:p>\n<w:pPr>\n");
        if let Some(borders) = &props.borders {
            self.output
                .push_str(&format!("<w:pBdr>{}</w:pBdr>\n", borders));
        }
        self.output.push_str(&format!(
            "<w:spacing w:before=\"{}\" w:after=\"{}\"/>\n",
            props.before, props.after
        ));
        if props.first_line > 0 {
            self.output
                .push_str(&format!("<w:ind w:firstLine=\"{}\"/>\n", props.first_line));
        }
        if let Some(align) = props.align {
            self.output.push_str(&format!("<w:jc w:val=\"{}\"/>\n", align));
        }
        self.output.push_str("</w:pPr>\n");
    }

    fn push_run(&mut self, text: &str, format: RunFormat) {
        self.output.push_str("<w:r>\n<w:rPr>");
        if format.bold {
            self.output.push_str("<w:b/><w:bCs/>");
        }
        if format.superscript {
            self.output.push_str("<w:vertAlign w:val=\"superscript\"/>");
        }
        let size = half_points(format.size_pt);
        self.output.push_str(&format!(
            "<w:sz w:val=\"{}\"/><w:szCs w:val=\"{}\"/>",
            size, size
        ));
        self.output.push_str("</w:rPr>\n");
        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape_xml(text)
        ));
        self.output.push_str("</w:r>\n");
    }
}

fn twips(mm: f64) -> i64 {
    round(mm_to_twips(mm))
}

fn pt_twips(pt: f64) -> i64 {
    round(pt_to_twips(pt))
}

fn half_points(pt: f64) -> i64 {
    round(pt_to_half_points(pt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{check_well_formed, extract_text};
    use transmittal_ast::{plain_text, DocumentRecord};
    use transmittal_core::test_utils::{fixed_clock, sample_assets, sample_record};
    use transmittal_core::{LogoSlot, Settings, TransmittalRequest};

    fn layout_for(record: &DocumentRecord) -> TransmittalLayout {
        let settings = Settings::default();
        let signatory = settings.signatory("secretary").unwrap().clone();
        let request = TransmittalRequest::new(record, &signatory, fixed_clock());
        TransmittalLayout::compose(&request, &settings)
    }

    fn document_xml(layout: &TransmittalLayout) -> String {
        let archive = DocxWriter::new()
            .build_package(layout, &sample_assets())
            .unwrap();
        archive.get_string(DOCUMENT_PART).unwrap()
    }

    #[test]
    fn test_document_is_well_formed() {
        let xml = document_xml(&layout_for(&sample_record()));
        check_well_formed(&xml).unwrap();
    }

    #[test]
    fn test_body_text_survives() {
        let layout = layout_for(&sample_record());
        let text = extract_text(&document_xml(&layout)).unwrap();
        assert!(text.contains(&plain_text(&layout.body)));
        assert!(text.contains("TRANSMITTAL SHEET"));
        assert!(text.contains("AN ORDINANCE REGULATING TRICYCLE FARES WITHIN THE CITY"));
    }

    #[test]
    fn test_superscript_suffix() {
        let xml = document_xml(&layout_for(&sample_record()));
        let at = xml.find(r#"<w:vertAlign w:val="superscript"/>"#).unwrap();
        let after = &xml[at..];
        assert!(after.contains(r#"<w:t xml:space="preserve">st</w:t>"#));
    }

    #[test]
    fn test_page_geometry() {
        let xml = document_xml(&layout_for(&sample_record()));
        assert!(xml.contains(r#"<w:pgSz w:w="12247" w:h="18711"/>"#));
        assert!(xml.contains(r#"w:top="0" w:right="1440" w:bottom="851" w:left="2160""#));
        // top margin and logo row carried by the first paragraph
        assert!(xml.contains(r#"<w:spacing w:before="2041" w:after="0"/>"#));
    }

    #[test]
    fn test_logos_are_anchored_to_the_page() {
        let xml = document_xml(&layout_for(&sample_record()));
        assert_eq!(xml.matches("<wp:anchor ").count(), 4);
        assert!(xml.contains(r#"<wp:positionH relativeFrom="page"><wp:posOffset>660600</wp:posOffset>"#));
        assert!(xml.contains(r#"<wp:extent cx="864000" cy="864000"/>"#));
        for slot in LogoSlot::ALL {
            assert!(xml.contains(slot.id()));
        }
    }

    #[test]
    fn test_rules() {
        let xml = document_xml(&layout_for(&sample_record()));
        assert!(xml.contains(r#"<w:bottom w:val="single" w:sz="12" w:space="1" w:color="000000"/>"#));
        assert!(xml.contains("<a:gradFill"));
        assert_eq!(xml.matches("<a:gs ").count(), 3);
    }

    #[test]
    fn test_empty_recipients_row() {
        let xml = document_xml(&layout_for(&DocumentRecord::new()));
        assert_eq!(xml.matches("<w:tr>").count(), 1);
        assert!(xml.contains(r#"<w:gridSpan w:val="4"/>"#));
        assert!(xml.contains("No recipients added."));
    }

    #[test]
    fn test_recipient_rows_in_order() {
        let xml = document_xml(&layout_for(&sample_record()));
        assert_eq!(xml.matches("<w:tr>").count(), 2);
        let first = xml.find("City Transport and Traffic Management Office").unwrap();
        let second = xml.find("Office of the City Treasurer").unwrap();
        assert!(first < second);
        assert_eq!(xml.matches(">Signature<").count(), 2);
    }

    #[test]
    fn test_missing_logo_fails() {
        let layout = layout_for(&sample_record());
        let assets = AssetBundle::new();
        let result = DocxWriter::new().build_package(&layout, &assets);
        assert!(matches!(result, Err(crate::OoxmlError::Asset(_))));
    }

    #[test]
    fn test_font_sizes_are_half_points() {
        let xml = document_xml(&layout_for(&sample_record()));
        // heading at 14pt
        assert!(xml.contains(r#"<w:sz w:val="28"/>"#));
        assert_eq!(half_points(10.5), 21);
    }
}
