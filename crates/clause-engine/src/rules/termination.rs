//! Detection of termination-without-notice clauses.

use crate::patterns::{
    contains_all_groups, NEGATION_KEYWORDS, NOTICE_KEYWORDS, TERMINATION_KEYWORDS,
};

/// Phrases that make the missing-notice reading unambiguous.
const STRONG_PHRASES: &[&str] = &[
    "without notice",
    "without prior notice",
    "without advance notice",
    "without any notice",
    "with immediate effect",
];

/// Score a clause for termination-without-notice language.
pub fn score(clause: &str) -> Option<f32> {
    let lower = clause.to_lowercase();

    if !TERMINATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return None;
    }

    if STRONG_PHRASES.iter().any(|p| lower.contains(p)) {
        return Some(0.9);
    }

    // Weaker reading: termination plus a negated notice obligation
    if contains_all_groups(&lower, &[NOTICE_KEYWORDS, NEGATION_KEYWORDS]) {
        return Some(0.7);
    }

    None
}
