//! Detection of unilateral amendment clauses.

use crate::patterns::{AMENDMENT_KEYWORDS, UNILATERAL_KEYWORDS};

const STRONG_PHRASES: &[&str] = &["sole discretion", "unilaterally", "without the consent"];

/// Score a clause for one-sided amendment rights.
pub fn score(clause: &str) -> Option<f32> {
    let lower = clause.to_lowercase();

    if !AMENDMENT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return None;
    }

    if STRONG_PHRASES.iter().any(|p| lower.contains(p)) {
        return Some(0.85);
    }

    if UNILATERAL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Some(0.7);
    }

    None
}
