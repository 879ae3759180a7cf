//! Package relationships
//!
//! OOXML maps relationship IDs to targets in `_rels/*.rels` parts. The
//! document part refers to its styles, footer and images through them.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};
use crate::xml::escape_xml;

/// OOXML namespace for relationships
pub const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Relationship type URIs
impl Relationships {
    pub const TYPE_OFFICE_DOCUMENT: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const TYPE_CORE_PROPERTIES: &'static str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const TYPE_STYLES: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const TYPE_FOOTER: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
    pub const TYPE_IMAGE: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
}

/// A relationship target with its type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

/// The relationships of one part, in insertion order
#[derive(Debug, Clone)]
pub struct Relationships {
    entries: Vec<Relationship>,
    /// Number of the next `rIdN`
    next_id_counter: u32,
}

impl Default for Relationships {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id_counter: 1,
        }
    }
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a `.rels` part
    ///
    /// Numbering continues after the highest `rIdN` found, so IDs added
    /// later never collide with existing ones.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        let mut rels = Self::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf).map_err(OoxmlError::Xml)? {
                Event::Eof => break,
                Event::Empty(ref e) | Event::Start(ref e)
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    if let Some(rel) = read_relationship(e) {
                        let number = rel.id.strip_prefix("rId").and_then(|n| n.parse::<u32>().ok());
                        if let Some(number) = number {
                            rels.next_id_counter = rels.next_id_counter.max(number + 1);
                        }
                        rels.entries.push(rel);
                    }
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Add a relationship and return the generated ID ("rId3")
    pub fn add(&mut self, target: impl Into<String>, rel_type: impl Into<String>) -> String {
        let id = format!("rId{}", self.next_id_counter);
        self.next_id_counter += 1;
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.into(),
            target: target.into(),
        });
        id
    }

    /// Add an image relationship (target relative to `word/`)
    pub fn add_image(&mut self, target: impl Into<String>) -> String {
        self.add(target, Self::TYPE_IMAGE)
    }

    /// Serialize to a `.rels` part
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Relationships xmlns="{}">"#, RELATIONSHIPS_NS));
        xml.push('\n');

        for rel in &self.entries {
            xml.push_str(&format!(
                "  <Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>\n",
                escape_xml(&rel.id),
                escape_xml(&rel.rel_type),
                escape_xml(&rel.target)
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }

    /// Get the target for a relationship ID
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.target.as_str())
    }

    /// Relationships of the given type, in insertion order
    pub fn of_type<'a>(&'a self, rel_type: &'a str) -> impl Iterator<Item = &'a Relationship> {
        self.entries.iter().filter(move |r| r.rel_type == rel_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over relationships in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter()
    }
}

/// One `<Relationship>` element; entries without `Id` or `Target` are skipped
fn read_relationship(element: &BytesStart<'_>) -> Option<Relationship> {
    let mut rel = Relationship {
        id: String::new(),
        rel_type: String::new(),
        target: String::new(),
    };
    for attr in element.attributes().flatten() {
        let Ok(value) = attr.unescape_value() else {
            continue;
        };
        match attr.key.local_name().as_ref() {
            b"Id" => rel.id = value.into_owned(),
            b"Type" => rel.rel_type = value.into_owned(),
            b"Target" => rel.target = value.into_owned(),
            _ => {}
        }
    }
    (!rel.id.is_empty() && !rel.target.is_empty()).then_some(rel)
}
