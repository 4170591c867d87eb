//! Per-request analysis orchestration.

use std::sync::Arc;

use analysis_types::{AnalysisError, AnalysisResult, Clause, Document, RiskFlag, Summary};
use clause_engine::rules::RISK_RULES;
use clause_engine::segmenter::extract_clauses;
use tracing::{debug, info};

use crate::backend::{EntailmentModel, InferenceError, SummaryModel};
use crate::config::AnalyzerConfig;
use crate::summarize::summarize_document;

/// Converts a [`Document`] into an [`AnalysisResult`].
///
/// Holds no per-request state; one instance is shared across all concurrent
/// requests behind an `Arc`.
pub struct Analyzer {
    summarizer: Arc<dyn SummaryModel>,
    entailment: Arc<dyn EntailmentModel>,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(
        summarizer: Arc<dyn SummaryModel>,
        entailment: Arc<dyn EntailmentModel>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            summarizer,
            entailment,
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub async fn analyze(&self, document: &Document) -> Result<AnalysisResult, AnalysisError> {
        if document.is_blank() {
            return Err(AnalysisError::EmptyDocument);
        }

        let words = document.word_count();
        if words > self.config.max_input_words {
            return Err(AnalysisError::UnsupportedLength(format!(
                "{} words exceeds the supported maximum of {}",
                words, self.config.max_input_words
            )));
        }

        let clause_texts = extract_clauses(&document.content, self.config.max_clauses);
        debug!(document_id = %document.id, clauses = clause_texts.len(), "segmented document");

        let summary_text =
            summarize_document(self.summarizer.as_ref(), &document.content, self.config.summary_words)
                .await
                .map_err(map_inference_error)?;

        let mut clauses: Vec<Clause> = clause_texts
            .iter()
            .enumerate()
            .map(|(index, text)| Clause {
                index,
                text: text.clone(),
                category: None,
                confidence: None,
            })
            .collect();

        let mut risks = Vec::new();
        for (index, text) in clause_texts.iter().enumerate() {
            for rule in RISK_RULES {
                let verdict = self
                    .entailment
                    .entails(text, rule.hypothesis)
                    .await
                    .map_err(map_inference_error)?;

                if !verdict.is_entailed(self.config.risk_threshold) {
                    continue;
                }

                // The clause keeps its best-scoring category
                let clause = &mut clauses[index];
                if clause.confidence.map_or(true, |c| verdict.score > c) {
                    clause.category = Some(rule.category);
                    clause.confidence = Some(verdict.score);
                }

                risks.push(RiskFlag {
                    category: rule.category,
                    severity: rule.severity,
                    description: rule.hypothesis.to_string(),
                    clause: Some(index),
                    snippet: Some(truncate_chars(text, 200)),
                });
            }
        }

        info!(
            document_id = %document.id,
            clauses = clauses.len(),
            risks = risks.len(),
            "analysis complete"
        );

        let result = AnalysisResult {
            document_id: document.id.clone(),
            clauses,
            risks,
            summary: Summary {
                text: summary_text,
                target_words: self.config.summary_words,
            },
            analyzed_at: chrono::Utc::now().timestamp() as u64,
        };
        debug_assert!(result.validate_references());

        Ok(result)
    }
}

fn map_inference_error(err: InferenceError) -> AnalysisError {
    match err {
        InferenceError::InputTooLong => {
            AnalysisError::UnsupportedLength("input exceeds model capacity".to_string())
        }
        other => AnalysisError::ModelUnavailable(other.to_string()),
    }
}

/// Char-boundary-safe prefix with an ellipsis marker when truncated.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(max_chars).collect();
        s.push_str("...");
        s
    }
}
