//! Model traits and the inference error taxonomy.

pub mod lexical;
pub mod remote;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("input exceeds model capacity")]
    InputTooLong,

    #[error("malformed model response: {0}")]
    Decode(String),
}

/// Three-way NLI verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntailmentLabel {
    Entailment,
    Neutral,
    Contradiction,
}

impl EntailmentLabel {
    /// Lenient parse of a model-reported label string.
    ///
    /// NLI checkpoints disagree on casing and exact wording, so anything
    /// containing "entail" counts as entailment.
    pub fn parse(label: &str) -> Self {
        let upper = label.to_uppercase();
        if upper.contains("ENTAIL") {
            Self::Entailment
        } else if upper.contains("CONTRADICT") {
            Self::Contradiction
        } else {
            Self::Neutral
        }
    }
}

/// A scored entailment verdict for one (premise, hypothesis) pair.
#[derive(Debug, Clone, Copy)]
pub struct Entailment {
    pub label: EntailmentLabel,
    pub score: f32,
}

impl Entailment {
    pub fn is_entailed(&self, threshold: f32) -> bool {
        self.label == EntailmentLabel::Entailment && self.score > threshold
    }
}

/// Length targets for one summarization call, in words.
#[derive(Debug, Clone, Copy)]
pub struct SummaryParams {
    pub max_words: usize,
    pub min_words: usize,
}

#[async_trait]
pub trait SummaryModel: Send + Sync {
    async fn summarize(&self, text: &str, params: &SummaryParams)
        -> Result<String, InferenceError>;
}

#[async_trait]
pub trait EntailmentModel: Send + Sync {
    /// Does `premise` entail `hypothesis`?
    async fn entails(&self, premise: &str, hypothesis: &str)
        -> Result<Entailment, InferenceError>;
}
