#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub created_at: u64,
}

impl Document {
    /// Build a document from raw text submitted in a request body.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            filename: None,
            content_type: None,
            created_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// Build a document from an uploaded file whose text has already been extracted.
    pub fn from_upload(
        content: impl Into<String>,
        filename: Option<String>,
        content_type: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            filename,
            content_type,
            created_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// A contractually significant span of text extracted from a document.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Clause {
    /// Position in the extracted clause sequence; risk flags refer to this.
    pub index: usize,
    pub text: String,
    /// Best-matching risk category, if any rule fired on this clause.
    pub category: Option<RiskCategory>,
    /// Confidence of the category assignment.
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RiskFlag {
    pub category: RiskCategory,
    pub severity: Severity,
    pub description: String,
    /// Index of the offending clause in the same result, if the flag is
    /// clause-level rather than document-level.
    pub clause: Option<usize>,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    pub text: String,
    pub target_words: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub document_id: String,
    pub clauses: Vec<Clause>,
    pub risks: Vec<RiskFlag>,
    pub summary: Summary,
    pub analyzed_at: u64,
}

impl AnalysisResult {
    /// Every clause-level flag must point at a clause that exists in this result.
    pub fn validate_references(&self) -> bool {
        self.risks
            .iter()
            .filter_map(|r| r.clause)
            .all(|i| i < self.clauses.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    TerminationWithoutNotice,
    LiabilityWaiver,
    AutoRenewal,
    UnilateralAmendment,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TerminationWithoutNotice => "termination_without_notice",
            Self::LiabilityWaiver => "liability_waiver",
            Self::AutoRenewal => "auto_renewal",
            Self::UnilateralAmendment => "unilateral_amendment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_from_text_assigns_id() {
        let doc = Document::from_text("Some contract text");
        assert!(!doc.id.is_empty());
        assert_eq!(doc.filename, None);
        assert!(!doc.is_blank());
    }

    #[test]
    fn test_blank_detection_ignores_whitespace() {
        let doc = Document::from_text("  \n\t  ");
        assert!(doc.is_blank());
        assert_eq!(doc.word_count(), 0);
    }

    #[test]
    fn test_validate_references_accepts_in_bounds() {
        let result = AnalysisResult {
            document_id: "d1".into(),
            clauses: vec![Clause {
                index: 0,
                text: "Either party may terminate without notice.".into(),
                category: Some(RiskCategory::TerminationWithoutNotice),
                confidence: Some(0.9),
            }],
            risks: vec![RiskFlag {
                category: RiskCategory::TerminationWithoutNotice,
                severity: Severity::Critical,
                description: "termination without notice".into(),
                clause: Some(0),
                snippet: None,
            }],
            summary: Summary {
                text: "A short summary.".into(),
                target_words: 200,
            },
            analyzed_at: 0,
        };
        assert!(result.validate_references());
    }

    #[test]
    fn test_validate_references_rejects_out_of_bounds() {
        let result = AnalysisResult {
            document_id: "d1".into(),
            clauses: vec![],
            risks: vec![RiskFlag {
                category: RiskCategory::AutoRenewal,
                severity: Severity::Warning,
                description: "renewal".into(),
                clause: Some(3),
                snippet: None,
            }],
            summary: Summary {
                text: String::new(),
                target_words: 200,
            },
            analyzed_at: 0,
        };
        assert!(!result.validate_references());
    }

    #[test]
    fn test_risk_category_serializes_snake_case() {
        let json = serde_json::to_string(&RiskCategory::LiabilityWaiver).unwrap();
        assert_eq!(json, "\"liability_waiver\"");
    }
}
