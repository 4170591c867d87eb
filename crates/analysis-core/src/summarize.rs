//! Chunked map-reduce summarization for long documents.

use clause_engine::chunker::{chunk_words, DEFAULT_CHUNK_WORDS};
use tracing::debug;

use crate::backend::{InferenceError, SummaryModel, SummaryParams};

/// Documents under this many words are summarized in a single model call.
pub const SINGLE_PASS_WORDS: usize = 800;

/// Word target for each per-chunk partial summary.
pub const PARTIAL_SUMMARY_WORDS: usize = 120;

/// Minimum length hint for single-pass and partial summaries.
pub const MIN_SUMMARY_WORDS: usize = 30;

/// Minimum length hint for the final reduce pass.
pub const MIN_FINAL_SUMMARY_WORDS: usize = 50;

/// Summarize a document to roughly `target_words` words.
///
/// Short documents get one model call. Longer ones are split into
/// fixed-size word windows, each summarized independently, and the
/// concatenated partials are reduced in a final call.
pub async fn summarize_document(
    model: &dyn SummaryModel,
    text: &str,
    target_words: usize,
) -> Result<String, InferenceError> {
    if text.split_whitespace().count() < SINGLE_PASS_WORDS {
        return model
            .summarize(
                text,
                &SummaryParams {
                    max_words: target_words,
                    min_words: MIN_SUMMARY_WORDS,
                },
            )
            .await;
    }

    let chunks = chunk_words(text, DEFAULT_CHUNK_WORDS);
    debug!(chunks = chunks.len(), "long document, map-reduce summarization");

    let mut partials = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let partial = model
            .summarize(
                chunk,
                &SummaryParams {
                    max_words: PARTIAL_SUMMARY_WORDS,
                    min_words: MIN_SUMMARY_WORDS,
                },
            )
            .await?;
        partials.push(partial);
    }

    let combined = partials.join(" ");
    model
        .summarize(
            &combined,
            &SummaryParams {
                max_words: target_words,
                min_words: MIN_FINAL_SUMMARY_WORDS,
            },
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records every call and echoes a fixed-length summary.
    struct CountingModel {
        calls: AtomicUsize,
    }

    impl CountingModel {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SummaryModel for CountingModel {
        async fn summarize(
            &self,
            text: &str,
            params: &SummaryParams,
        ) -> Result<String, InferenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let summary: Vec<&str> = text
                .split_whitespace()
                .take(params.max_words.min(10))
                .collect();
            Ok(summary.join(" "))
        }
    }

    #[tokio::test]
    async fn test_short_document_is_single_pass() {
        let model = CountingModel::new();
        let text = "A short agreement between two parties.";
        let summary = summarize_document(&model, text, 200).await.unwrap();
        assert!(!summary.is_empty());
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_long_document_uses_map_reduce() {
        let model = CountingModel::new();
        let text = vec!["word"; 1500].join(" ");
        summarize_document(&model, &text, 200).await.unwrap();
        // 1500 words -> 3 chunks of <=700, plus the final reduce pass
        assert_eq!(model.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_boundary_document_stays_single_pass() {
        let model = CountingModel::new();
        let text = vec!["word"; SINGLE_PASS_WORDS - 1].join(" ");
        summarize_document(&model, &text, 200).await.unwrap();
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        struct FailingModel;

        #[async_trait]
        impl SummaryModel for FailingModel {
            async fn summarize(
                &self,
                _text: &str,
                _params: &SummaryParams,
            ) -> Result<String, InferenceError> {
                Err(InferenceError::Server {
                    status: 503,
                    body: "model loading".into(),
                })
            }
        }

        let err = summarize_document(&FailingModel, "some text", 200)
            .await
            .unwrap_err();
        assert!(matches!(err, InferenceError::Server { status: 503, .. }));
    }
}
