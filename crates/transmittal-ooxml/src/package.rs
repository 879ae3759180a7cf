//! Fixed package parts
//!
//! Content types, package relationships, styles, core properties and the
//! footer. Everything here is a pure function of its arguments.

use crate::relationships::Relationships;
use crate::xml::escape_xml;

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const STYLES_PART: &str = "word/styles.xml";
pub const FOOTER_PART: &str = "word/footer1.xml";
pub const CORE_PART: &str = "docProps/core.xml";

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// `[Content_Types].xml` for the document, styles, footer and core parts
/// plus the given media extensions
pub fn content_types_xml(media: &[(&str, &str)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
"#,
    );

    for (extension, content_type) in media {
        xml.push_str(&format!(
            "  <Default Extension=\"{}\" ContentType=\"{}\"/>\n",
            extension, content_type
        ));
    }

    xml.push_str(
        r#"  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/footer1.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#,
    );
    xml
}

/// `_rels/.rels`
pub fn root_rels_xml() -> String {
    let mut rels = Relationships::new();
    rels.add("word/document.xml", Relationships::TYPE_OFFICE_DOCUMENT);
    rels.add("docProps/core.xml", Relationships::TYPE_CORE_PROPERTIES);
    rels.to_xml()
}

/// `word/styles.xml` with the document font and default size
pub fn styles_xml(font_family: &str, size_half_points: i64) -> String {
    let font = escape_xml(font_family);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{ns}">
  <w:docDefaults>
    <w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/><w:lang w:val="en-PH"/></w:rPr></w:rPrDefault>
    <w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr></w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>
  <w:style w:type="paragraph" w:styleId="Footer"><w:name w:val="footer"/><w:basedOn w:val="Normal"/></w:style>
  <w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/><w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style>
</w:styles>"#,
        ns = WORDML_NS,
        font = font,
        size = size_half_points
    )
}

/// `docProps/core.xml`
///
/// No creation or modification dates are written, so identical inputs
/// produce identical packages.
pub fn core_xml(title: &str, creator: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{}</dc:title><dc:creator>{}</dc:creator></cp:coreProperties>"#,
        escape_xml(title),
        escape_xml(creator)
    )
}

/// `word/footer1.xml`: one right-aligned line
pub fn footer_xml(text: &str, size_half_points: i64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:ftr xmlns:w="{ns}"><w:p><w:pPr><w:pStyle w:val="Footer"/><w:jc w:val="right"/></w:pPr><w:r><w:rPr><w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr><w:t xml:space="preserve">{text}</w:t></w:r></w:p></w:ftr>"#,
        ns = WORDML_NS,
        size = size_half_points,
        text = escape_xml(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::check_well_formed;

    #[test]
    fn test_parts_are_well_formed() {
        check_well_formed(&content_types_xml(&[("png", "image/png")])).unwrap();
        check_well_formed(&root_rels_xml()).unwrap();
        check_well_formed(&styles_xml("Times New Roman", 24)).unwrap();
        check_well_formed(&core_xml("Transmittal Sheet N/A", "City <Office>")).unwrap();
        check_well_formed(&footer_xml("Generated on: 1/25/2024, 2:30:00 PM", 16)).unwrap();
    }

    #[test]
    fn test_content_types_register_media() {
        let xml = content_types_xml(&[("png", "image/png"), ("jpeg", "image/jpeg")]);
        assert!(xml.contains(r#"Extension="png" ContentType="image/png""#));
        assert!(xml.contains(r#"Extension="jpeg" ContentType="image/jpeg""#));
        assert!(xml.contains("/word/footer1.xml"));
    }

    #[test]
    fn test_footer_is_right_aligned() {
        let xml = footer_xml("Generated on: 1/25/2024, 2:30:00 PM", 16);
        assert!(xml.contains(r#"<w:jc w:val="right"/>"#));
        assert!(xml.contains("Generated on: 1/25/2024, 2:30:00 PM"));
    }

    #[test]
    fn test_root_rels_point_at_document() {
        let rels = Relationships::parse(root_rels_xml().as_bytes()).unwrap();
        assert_eq!(rels.get("rId1"), Some("word/document.xml"));
    }
}
