//! Upload-to-text extraction.
//!
//! Turns an uploaded payload into plain text: PDFs go through `pdf-extract`,
//! everything else is decoded as UTF-8 with a Latin-1 byte fallback.

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to extract PDF text: {0}")]
    Pdf(String),
}

/// True when the payload should be treated as a PDF, judged by filename
/// extension or declared content type.
pub fn is_pdf(filename: Option<&str>, content_type: Option<&str>) -> bool {
    if let Some(name) = filename {
        if name.to_lowercase().ends_with(".pdf") {
            return true;
        }
    }
    matches!(content_type, Some(ct) if ct.eq_ignore_ascii_case("application/pdf"))
}

/// Extract plain text from an uploaded payload.
pub fn extract_text(
    bytes: &[u8],
    filename: Option<&str>,
    content_type: Option<&str>,
) -> Result<String, ExtractError> {
    if is_pdf(filename, content_type) {
        debug!(
            size = bytes.len(),
            filename = filename.unwrap_or("<unnamed>"),
            "extracting text from PDF upload"
        );
        return pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()));
    }

    Ok(decode_text(bytes))
}

/// UTF-8 first; on failure, Latin-1, where every byte is a code point.
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
