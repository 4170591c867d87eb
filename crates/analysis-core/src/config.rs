//! Environment-driven analyzer configuration.

use clause_engine::segmenter::DEFAULT_MAX_CLAUSES;

/// Which inference backend serves model calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Model-serving sidecar over HTTP (production).
    Remote,
    /// Deterministic keyword heuristics, no model server required.
    Lexical,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Lexical => "lexical",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub backend: BackendKind,
    pub model_server_url: String,
    pub summarization_model: String,
    pub entailment_model: String,
    /// Documents above this word count are rejected before any model call.
    pub max_input_words: usize,
    pub max_clauses: usize,
    /// Target length of the final summary, in words.
    pub summary_words: usize,
    /// Entailment score a clause must exceed to be flagged.
    pub risk_threshold: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Remote,
            model_server_url: "http://127.0.0.1:8501".to_string(),
            summarization_model: "facebook/bart-large-cnn".to_string(),
            entailment_model: "roberta-large-mnli".to_string(),
            max_input_words: 50_000,
            max_clauses: DEFAULT_MAX_CLAUSES,
            summary_words: 200,
            risk_threshold: 0.6,
        }
    }
}

impl AnalyzerConfig {
    /// Read configuration from the environment, falling back to defaults for
    /// unset or unparseable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let backend = match std::env::var("INFERENCE_BACKEND").as_deref() {
            Ok("lexical") => BackendKind::Lexical,
            _ => BackendKind::Remote,
        };

        Self {
            backend,
            model_server_url: env_string("MODEL_SERVER_URL", defaults.model_server_url),
            summarization_model: env_string("SUMMARIZATION_MODEL", defaults.summarization_model),
            entailment_model: env_string("ENTAILMENT_MODEL", defaults.entailment_model),
            max_input_words: env_parse("MAX_INPUT_WORDS", defaults.max_input_words),
            max_clauses: env_parse("MAX_CLAUSES", defaults.max_clauses),
            summary_words: env_parse("SUMMARY_WORDS", defaults.summary_words),
            risk_threshold: env_parse("RISK_THRESHOLD", defaults.risk_threshold),
        }
    }
}

fn env_string(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
