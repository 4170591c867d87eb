//! Application state for the Analyzer API
//!
//! Holds the shared analyzer, wired to the configured inference backend.

use std::sync::Arc;

use analysis_core::{Analyzer, AnalyzerConfig, BackendKind, LexicalBackend, RemoteModelClient};
use tracing::info;

/// Shared application state
pub struct AppState {
    /// The document analyzer, shared read-only across requests
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    /// Initialize application state from environment configuration
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::from_env())
    }

    /// Build state for a specific configuration (used directly by tests)
    pub fn with_config(config: AnalyzerConfig) -> Self {
        info!(
            backend = config.backend.as_str(),
            "initializing inference backend"
        );

        let analyzer = match config.backend {
            BackendKind::Remote => {
                let client = Arc::new(RemoteModelClient::new(
                    config.model_server_url.clone(),
                    config.summarization_model.clone(),
                    config.entailment_model.clone(),
                ));
                Analyzer::new(client.clone(), client, config)
            }
            BackendKind::Lexical => {
                let backend = Arc::new(LexicalBackend::new());
                Analyzer::new(backend.clone(), backend, config)
            }
        };

        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
