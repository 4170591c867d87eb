//! Paragraph-based clause segmentation.
//!
//! Contracts are split on blank-line boundaries; short fragments (headings,
//! page numbers, signature lines) are dropped.

use lazy_static::lazy_static;
use regex::Regex;

/// Paragraphs at or below this many characters are not treated as clauses.
pub const MIN_CLAUSE_CHARS: usize = 40;

/// Default cap on the number of clauses extracted per document.
pub const DEFAULT_MAX_CLAUSES: usize = 20;

lazy_static! {
    static ref BLANK_RUN: Regex = Regex::new(r"\n{2,}").unwrap();
    static ref PARAGRAPH_SPLIT: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Extract up to `max_clauses` clause candidates from raw document text.
///
/// Order follows document order. A single paragraph with no blank lines is
/// one clause (provided it clears the length floor).
pub fn extract_clauses(text: &str, max_clauses: usize) -> Vec<String> {
    let collapsed = BLANK_RUN.replace_all(text, "\n\n");

    let mut clauses = Vec::new();
    for paragraph in PARAGRAPH_SPLIT.split(&collapsed) {
        if clauses.len() >= max_clauses {
            break;
        }
        let paragraph = paragraph.trim();
        if paragraph.chars().count() > MIN_CLAUSE_CHARS {
            clauses.push(paragraph.to_string());
        }
    }

    clauses
}
