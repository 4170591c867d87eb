//! Detection of automatic renewal clauses.

use crate::patterns::{AUTOMATIC_KEYWORDS, RENEWAL_KEYWORDS};

const STRONG_PHRASES: &[&str] = &[
    "automatically renew",
    "automatically renews",
    "automatically extend",
    "automatic renewal",
    "auto-renew",
    "auto renew",
];

/// Score a clause for automatic renewal language.
pub fn score(clause: &str) -> Option<f32> {
    let lower = clause.to_lowercase();

    if STRONG_PHRASES.iter().any(|p| lower.contains(p)) {
        return Some(0.85);
    }

    let has_renewal = RENEWAL_KEYWORDS.iter().any(|kw| lower.contains(kw));
    let has_automatic = AUTOMATIC_KEYWORDS.iter().any(|kw| lower.contains(kw));

    if has_renewal && has_automatic {
        return Some(0.7);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_automatic_renewal() {
        let s = score("This agreement automatically renews for successive one-year terms.").unwrap();
        assert!(s >= 0.85);
    }

    #[test]
    fn test_flags_auto_renew_spelling() {
        assert!(score("The plan will auto-renew unless cancelled beforehand.").is_some());
    }

    #[test]
    fn test_flags_renewal_automatic_cluster() {
        let clause = "Renewal of the term occurs on an automatic basis each January.";
        assert!(score(clause).unwrap() > 0.6);
    }

    #[test]
    fn test_ignores_renewal_by_mutual_agreement() {
        assert!(score("The parties may renew this lease by mutual written agreement.").is_none());
    }
}
