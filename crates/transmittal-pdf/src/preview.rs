//! In-app preview
//!
//! A preview is the PDF encoded as a `data:application/pdf;base64,` URI.
//! [`decode_data_uri`] turns such a URI back into PDF bytes for download and
//! [`html_preview`] wraps it in a self-contained HTML page.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{PdfError, Result};

/// Prefix of every PDF preview URI
pub const PDF_DATA_URI_PREFIX: &str = "data:application/pdf;base64,";

const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Encode PDF bytes as a data URI
pub fn encode_data_uri(pdf: &[u8]) -> String {
    format!("{}{}", PDF_DATA_URI_PREFIX, STANDARD.encode(pdf))
}

/// Decode a PDF data URI back into PDF bytes
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| PdfError::Preview("missing `data:` scheme".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| PdfError::Preview("missing `,` before the payload".to_string()))?;

    let mut params = header.split(';');
    let media_type = params.next().unwrap_or_default();
    if !media_type.eq_ignore_ascii_case(PDF_MEDIA_TYPE) {
        return Err(PdfError::Preview(format!(
            "expected media type {}, found {:?}",
            PDF_MEDIA_TYPE, media_type
        )));
    }
    if !params.any(|p| p.eq_ignore_ascii_case("base64")) {
        return Err(PdfError::Preview(
            "payload is not marked `;base64`".to_string(),
        ));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| PdfError::Preview(format!("invalid base64 payload: {}", e)))?;

    if !bytes.starts_with(b"%PDF") {
        return Err(PdfError::Preview(
            "payload is not a PDF document".to_string(),
        ));
    }

    Ok(bytes)
}

/// Self-contained HTML page showing a PDF data URI in a frame
pub fn html_preview(title: &str, data_uri: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        * {{ box-sizing: border-box; }}
        html, body {{ height: 100%; margin: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            display: flex;
            flex-direction: column;
            background: #f8f9fa;
        }}
        header {{
            padding: 0.75rem 1.5rem;
            border-bottom: 2px solid #dee2e6;
            color: #212529;
            font-weight: 600;
        }}
        iframe {{ flex: 1; width: 100%; border: none; }}
    </style>
</head>
<body>
    <header>{title}</header>
    <iframe src="{uri}" title="{title}"></iframe>
</body>
</html>
"#,
        title = title,
        uri = escape_html(data_uri)
    )
}

/// Escape text for HTML content and attributes
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
