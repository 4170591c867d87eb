//! HTTP client for a model-serving sidecar.
//!
//! The sidecar speaks a minimal JSON protocol: `POST /summarize` for the
//! summarization pipeline and `POST /classify` for NLI entailment. The
//! client is stateless and shareable across concurrent requests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Entailment, EntailmentLabel, EntailmentModel, InferenceError, SummaryModel, SummaryParams};

pub struct RemoteModelClient {
    client: reqwest::Client,
    base_url: String,
    summarization_model: String,
    entailment_model: String,
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
    model: &'a str,
    max_length: usize,
    min_length: usize,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    summary_text: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
    text_pair: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    label: String,
    score: f32,
}

impl RemoteModelClient {
    /// Create a client for the given model server base URL.
    ///
    /// `base_url` should be like `http://127.0.0.1:8501` (no trailing slash).
    pub fn new(
        base_url: String,
        summarization_model: String,
        entailment_model: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            summarization_model,
            entailment_model,
        }
    }

    pub fn summarization_model(&self) -> &str {
        &self.summarization_model
    }

    pub fn entailment_model(&self) -> &str {
        &self.entailment_model
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, InferenceError> {
        let status = resp.status();
        if status == reqwest::StatusCode::PAYLOAD_TOO_LARGE
            || status == reqwest::StatusCode::UNPROCESSABLE_ENTITY
        {
            return Err(InferenceError::InputTooLong);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }
}

#[async_trait]
impl SummaryModel for RemoteModelClient {
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> Result<String, InferenceError> {
        let url = format!("{}/summarize", self.base_url);
        info!(url = %url, words = text.split_whitespace().count(), "calling summarization model");

        let resp = self
            .client
            .post(&url)
            .json(&SummarizeRequest {
                text,
                model: &self.summarization_model,
                max_length: params.max_words,
                min_length: params.min_words,
            })
            .send()
            .await?;

        let resp = Self::check(resp).await?;
        let parsed: SummarizeResponse = resp
            .json()
            .await
            .map_err(|e| InferenceError::Decode(e.to_string()))?;
        Ok(parsed.summary_text)
    }
}

#[async_trait]
impl EntailmentModel for RemoteModelClient {
    async fn entails(
        &self,
        premise: &str,
        hypothesis: &str,
    ) -> Result<Entailment, InferenceError> {
        let url = format!("{}/classify", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&ClassifyRequest {
                text: premise,
                text_pair: hypothesis,
                model: &self.entailment_model,
            })
            .send()
            .await?;

        let resp = Self::check(resp).await?;
        let parsed: ClassifyResponse = resp
            .json()
            .await
            .map_err(|e| InferenceError::Decode(e.to_string()))?;

        Ok(Entailment {
            label: EntailmentLabel::parse(&parsed.label),
            score: parsed.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = RemoteModelClient::new(
            "http://localhost:8501/".into(),
            "facebook/bart-large-cnn".into(),
            "roberta-large-mnli".into(),
        );
        assert_eq!(client.base_url, "http://localhost:8501");
        assert_eq!(client.summarization_model(), "facebook/bart-large-cnn");
    }

    #[test]
    fn test_request_shapes_serialize() {
        let req = SummarizeRequest {
            text: "clause text",
            model: "facebook/bart-large-cnn",
            max_length: 200,
            min_length: 30,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["max_length"], 200);

        let req = ClassifyRequest {
            text: "premise",
            text_pair: "hypothesis",
            model: "roberta-large-mnli",
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["text_pair"], "hypothesis");
    }
}
