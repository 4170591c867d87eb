//! Detection of clauses that remove or cap liability.

use lazy_static::lazy_static;
use regex::Regex;

use crate::patterns::{LIABILITY_KEYWORDS, LIMITATION_KEYWORDS};

lazy_static! {
    static ref NOT_LIABLE: Regex =
        Regex::new(r"(?:shall|will|can)\s+not\s+be\s+(?:held\s+)?liable").unwrap();
    static ref IN_NO_EVENT: Regex = Regex::new(r"in\s+no\s+event").unwrap();
}

/// Score a clause for liability-stripping language.
pub fn score(clause: &str) -> Option<f32> {
    let lower = clause.to_lowercase();

    if !LIABILITY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return None;
    }

    if NOT_LIABLE.is_match(&lower) || IN_NO_EVENT.is_match(&lower) {
        return Some(0.85);
    }

    if LIMITATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Some(0.7);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_shall_not_be_liable() {
        let s = score("The provider shall not be liable for any indirect damages.").unwrap();
        assert!(s >= 0.85);
    }

    #[test]
    fn test_flags_held_liable_variant() {
        assert!(score("The company will not be held liable for losses arising hereunder.").is_some());
    }

    #[test]
    fn test_flags_in_no_event() {
        assert!(score("In no event shall aggregate liability exceed the fees paid.").is_some());
    }

    #[test]
    fn test_flags_waiver_of_claims() {
        let s = score("The customer waives all claims against the operator.").unwrap();
        assert!(s > 0.6);
    }

    #[test]
    fn test_ignores_liability_insurance_requirement() {
        assert!(score("The contractor shall carry general insurance coverage.").is_none());
    }
}
