//! XML text helpers

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};

/// Escape special XML characters
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Check that a generated part parses as XML with balanced tags
pub fn check_well_formed(xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    let mut depth: usize = 0;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(OoxmlError::Xml(e)),
        }
    }

    if depth != 0 {
        return Err(OoxmlError::InvalidStructure(format!(
            "{} unclosed element(s) at end of part",
            depth
        )));
    }
    Ok(())
}

/// Text of every `<w:t>` element, concatenated in document order
pub fn extract_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => in_text = false,
            Ok(Event::Text(t)) if in_text => {
                text.push_str(&t.unescape()?);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(OoxmlError::Xml(e)),
        }
    }

    Ok(text)
}
