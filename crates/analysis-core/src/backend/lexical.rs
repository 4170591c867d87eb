//! Offline lexical baseline backend.
//!
//! Requires no model server: entailment is scored by the keyword heuristics
//! in `clause-engine`, and summarization is lead-sentence extraction. Useful
//! for air-gapped deployments and as a degraded-mode fallback.

use async_trait::async_trait;
use clause_engine::rules::{lexical_score, RISK_RULES};

use super::{Entailment, EntailmentLabel, EntailmentModel, InferenceError, SummaryModel, SummaryParams};

#[derive(Default)]
pub struct LexicalBackend;

impl LexicalBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EntailmentModel for LexicalBackend {
    async fn entails(
        &self,
        premise: &str,
        hypothesis: &str,
    ) -> Result<Entailment, InferenceError> {
        // The hypothesis is the lookup key back into the rule catalog;
        // unknown hypotheses score as neutral rather than erroring.
        let verdict = RISK_RULES
            .iter()
            .find(|rule| rule.hypothesis == hypothesis)
            .and_then(|rule| lexical_score(rule.category, premise));

        Ok(match verdict {
            Some(score) => Entailment {
                label: EntailmentLabel::Entailment,
                score,
            },
            None => Entailment {
                label: EntailmentLabel::Neutral,
                score: 0.0,
            },
        })
    }
}

#[async_trait]
impl SummaryModel for LexicalBackend {
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<String, InferenceError> {
        Ok(lead_sentences(text, params.max_words))
    }
}

/// Extractive fallback: leading sentences up to the word budget.
fn lead_sentences(text: &str, max_words: usize) -> String {
    let mut out = String::new();
    let mut words = 0;

    for sentence in text.split_inclusive(['.', '!', '?']) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }

        let count = sentence.split_whitespace().count();
        if words > 0 && words + count > max_words {
            break;
        }

        if !out.is_empty() {
            out.push(' ');
        }

        if count > max_words {
            // A single sentence over budget is hard-capped
            out.push_str(
                &sentence
                    .split_whitespace()
                    .take(max_words)
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            words = max_words;
        } else {
            out.push_str(sentence);
            words += count;
        }

        if words >= max_words {
            break;
        }
    }

    out
}
