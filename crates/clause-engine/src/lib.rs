pub mod chunker;
pub mod patterns;
pub mod rules;
pub mod segmenter;

pub use rules::{lexical_score, RiskRule, RISK_RULES};
pub use segmenter::extract_clauses;

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_types::RiskCategory;

    #[test]
    fn test_segmented_clauses_feed_the_rules() {
        let text = "This agreement shall terminate without notice to the subscriber.\n\n\
                    The provider shall not be liable for any damages arising from use of the service.\n\n\
                    This agreement automatically renews for successive one-year terms.";
        let clauses = extract_clauses(text, 20);
        assert_eq!(clauses.len(), 3);

        let fired: Vec<RiskCategory> = RISK_RULES
            .iter()
            .filter(|rule| {
                clauses
                    .iter()
                    .any(|c| lexical_score(rule.category, c).is_some())
            })
            .map(|rule| rule.category)
            .collect();

        assert!(fired.contains(&RiskCategory::TerminationWithoutNotice));
        assert!(fired.contains(&RiskCategory::LiabilityWaiver));
        assert!(fired.contains(&RiskCategory::AutoRenewal));
    }

    #[test]
    fn test_benign_text_fires_no_rules() {
        let text = "The parties agree to meet quarterly to review service performance metrics.";
        for rule in RISK_RULES {
            assert!(lexical_score(rule.category, text).is_none());
        }
    }
}
