//! Inference adapter and per-request analysis orchestration.
//!
//! The [`Analyzer`] converts a `Document` into an `AnalysisResult` by way of
//! two narrow model traits: [`SummaryModel`] and [`EntailmentModel`]. The
//! traits are backed by a remote model-serving client in production and by a
//! deterministic lexical baseline offline; tests use stubs.

pub mod analyzer;
pub mod backend;
pub mod config;
pub mod summarize;

pub use analyzer::Analyzer;
pub use backend::lexical::LexicalBackend;
pub use backend::remote::RemoteModelClient;
pub use backend::{
    Entailment, EntailmentLabel, EntailmentModel, InferenceError, SummaryModel, SummaryParams,
};
pub use config::{AnalyzerConfig, BackendKind};
