//! Risk rule catalog.
//!
//! Each rule pairs a clause category with the entailment hypothesis sent to
//! the inference backend and a lexical scorer used by the offline backend.

pub mod amendment;
pub mod liability;
pub mod renewal;
pub mod termination;

use analysis_types::{RiskCategory, Severity};

/// A single risk-detection rule.
pub struct RiskRule {
    pub category: RiskCategory,
    /// Hypothesis tested against each clause by the entailment model.
    pub hypothesis: &'static str,
    pub severity: Severity,
}

pub const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        category: RiskCategory::TerminationWithoutNotice,
        hypothesis: "This clause allows termination without notice.",
        severity: Severity::Critical,
    },
    RiskRule {
        category: RiskCategory::LiabilityWaiver,
        hypothesis: "This clause removes or limits liability.",
        severity: Severity::Critical,
    },
    RiskRule {
        category: RiskCategory::AutoRenewal,
        hypothesis: "This clause allows automatic renewal.",
        severity: Severity::Warning,
    },
    RiskRule {
        category: RiskCategory::UnilateralAmendment,
        hypothesis: "This clause allows unilateral amendment.",
        severity: Severity::Warning,
    },
];

/// Look up the rule for a category.
pub fn rule_for(category: RiskCategory) -> &'static RiskRule {
    RISK_RULES
        .iter()
        .find(|r| r.category == category)
        .expect("every category has a rule")
}

/// Score a clause against a category using the lexical heuristics.
///
/// Returns a confidence in (0, 1] when the heuristic fires, `None` otherwise.
pub fn lexical_score(category: RiskCategory, clause: &str) -> Option<f32> {
    match category {
        RiskCategory::TerminationWithoutNotice => termination::score(clause),
        RiskCategory::LiabilityWaiver => liability::score(clause),
        RiskCategory::AutoRenewal => renewal::score(clause),
        RiskCategory::UnilateralAmendment => amendment::score(clause),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_rule() {
        for category in [
            RiskCategory::TerminationWithoutNotice,
            RiskCategory::LiabilityWaiver,
            RiskCategory::AutoRenewal,
            RiskCategory::UnilateralAmendment,
        ] {
            let rule = rule_for(category);
            assert_eq!(rule.category, category);
            assert!(!rule.hypothesis.is_empty());
        }
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let samples = [
            "This agreement shall terminate without notice.",
            "The provider shall not be liable for indirect damages.",
            "The subscription automatically renews each year.",
            "The company may amend these terms at its sole discretion.",
        ];
        for rule in RISK_RULES {
            for sample in samples {
                if let Some(score) = lexical_score(rule.category, sample) {
                    assert!(score > 0.0 && score <= 1.0);
                }
            }
        }
    }
}
