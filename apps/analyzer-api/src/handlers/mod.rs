//! HTTP request handlers for the Analyzer API

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use analysis_types::{AnalysisError, AnalysisResult, Document};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub models: ModelInfo,
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub summarizer: String,
    pub entailment: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error payload mapped from the analysis error taxonomy.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        let status = match &err {
            AnalysisError::EmptyDocument | AnalysisError::Extraction(_) => StatusCode::BAD_REQUEST,
            AnalysisError::UnsupportedLength(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AnalysisError::ModelUnavailable(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let config = state.analyzer.config();

    Json(HealthResponse {
        status: "ok".to_string(),
        backend: config.backend.as_str().to_string(),
        models: ModelInfo {
            summarizer: config.summarization_model.clone(),
            entailment: config.entailment_model.clone(),
        },
    })
}

/// Analyze raw document text
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    info!(words = request.text.split_whitespace().count(), "analyze request");

    let document = Document::from_text(request.text);
    let result = state.analyzer.analyze(&document).await.map_err(|e| {
        error!("Analysis failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(result))
}

/// Analyze an uploaded file (PDF or plain text)
pub async fn analyze_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, ApiError> {
    let mut payload: Option<(Vec<u8>, Option<String>, Option<String>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read upload: {}", e)))?;

        payload = Some((bytes.to_vec(), filename, content_type));
        break;
    }

    let (bytes, filename, content_type) =
        payload.ok_or_else(|| ApiError::bad_request("missing 'file' part in multipart body"))?;

    info!(
        size = bytes.len(),
        filename = filename.as_deref().unwrap_or("<unnamed>"),
        "file analysis request"
    );

    let text = doc_extract::extract_text(&bytes, filename.as_deref(), content_type.as_deref())
        .map_err(|e| {
            error!("Text extraction failed: {}", e);
            ApiError::from(AnalysisError::Extraction(e.to_string()))
        })?;

    let document = Document::from_upload(text, filename, content_type);
    let result = state.analyzer.analyze(&document).await.map_err(|e| {
        error!("Analysis failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(result))
}

// ============================================================================
// Tests
// ============================================================================
