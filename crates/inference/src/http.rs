//! HTTP Analysis Service
//!
//! Implementation of the AnalysisService trait for the JSON-over-HTTP
//! inference API (`POST /analyze`, `POST /analyze-batch`, `GET /health`).

use async_trait::async_trait;
use serde::Serialize;

use sentiment_insight_core::{
    AnalysisRequest, BatchAnalysisResponse, RawAnalysisResult, ServiceConfig,
};

use crate::http_client::build_http_client;
use crate::provider::{parse_http_error, AnalysisService};
use crate::types::{InferenceError, InferenceResult};

/// Inference service reached over HTTP
pub struct HttpAnalysisService {
    config: ServiceConfig,
    client: reqwest::Client,
}

impl HttpAnalysisService {
    /// Create a new service client with the given configuration
    pub fn new(config: ServiceConfig) -> InferenceResult<Self> {
        let client = build_http_client(&config)?;
        tracing::debug!("Inference client initialized: url={}", config.base_url);
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// POST a JSON body and return the raw response text of a 2xx reply.
    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> InferenceResult<String> {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        let body_text = response.text().await.map_err(map_request_error)?;

        if !status.is_success() {
            tracing::warn!("Inference service returned HTTP {} for {}", status.as_u16(), url);
            return Err(parse_http_error(status.as_u16(), &body_text));
        }

        Ok(body_text)
    }
}

/// Timeouts get their own variant; everything else is a network failure.
fn map_request_error(e: reqwest::Error) -> InferenceError {
    if e.is_timeout() {
        InferenceError::Timeout {
            message: e.to_string(),
        }
    } else {
        InferenceError::network(e)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn analyze(&self, text: &str) -> InferenceResult<RawAnalysisResult> {
        let request = AnalysisRequest::single(text);
        let body_text = self.post_json(request.path(), &request).await?;

        serde_json::from_str(&body_text)
            .map_err(|e| InferenceError::parse(format!("Failed to parse response: {}", e)))
    }

    async fn analyze_batch(&self, texts: &[String]) -> InferenceResult<Vec<RawAnalysisResult>> {
        let request = AnalysisRequest::batch(texts.to_vec());
        let body_text = self.post_json(request.path(), &request).await?;

        let response: BatchAnalysisResponse = serde_json::from_str(&body_text)
            .map_err(|e| InferenceError::parse(format!("Failed to parse response: {}", e)))?;

        if response.results.len() != texts.len() {
            return Err(InferenceError::MisalignedBatch {
                expected: texts.len(),
                actual: response.results.len(),
            });
        }

        Ok(response.results)
    }

    async fn health_check(&self) -> InferenceResult<()> {
        let url = self.config.endpoint("/health");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_http_error(status.as_u16(), &body))
        }
    }
}
