use thiserror::Error;

/// Request-level failures surfaced to API callers.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("document is empty")]
    EmptyDocument,

    #[error("document exceeds supported length: {0}")]
    UnsupportedLength(String),

    #[error("inference backend unavailable: {0}")]
    ModelUnavailable(String),

    #[error("failed to extract document text: {0}")]
    Extraction(String),
}

impl AnalysisError {
    /// Client-caused errors are reported as 4xx; everything else is the
    /// backend's fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyDocument | Self::UnsupportedLength(_) | Self::Extraction(_)
        )
    }
}
