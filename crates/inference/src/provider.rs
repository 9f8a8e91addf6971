//! Analysis Service Trait
//!
//! Defines the common interface for anything that can analyze statements.

use async_trait::async_trait;
use sentiment_insight_core::{AnalysisRequest, RawAnalysisResult};

use crate::types::{AnalysisResponse, InferenceError, InferenceResult};

/// Trait that all analysis backends must implement.
///
/// Provides a unified interface for:
/// - Single-statement analysis (`analyze`)
/// - Positionally aligned batch analysis (`analyze_batch`)
/// - Health checking
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Returns the backend name for identification.
    fn name(&self) -> &'static str;

    /// Analyze one statement.
    async fn analyze(&self, text: &str) -> InferenceResult<RawAnalysisResult>;

    /// Analyze several statements in one round trip.
    ///
    /// Implementations must return exactly one result per input, in input
    /// order, or fail with `MisalignedBatch`.
    async fn analyze_batch(&self, texts: &[String]) -> InferenceResult<Vec<RawAnalysisResult>>;

    /// Check if the service is reachable and healthy.
    async fn health_check(&self) -> InferenceResult<()>;

    /// Dispatch a request to the matching endpoint.
    async fn submit(&self, request: &AnalysisRequest) -> InferenceResult<AnalysisResponse> {
        match request {
            AnalysisRequest::Single { text } => self.analyze(text).await.map(AnalysisResponse::Single),
            AnalysisRequest::Batch { texts } => {
                self.analyze_batch(texts).await.map(AnalysisResponse::Batch)
            }
        }
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str) -> InferenceError {
    match status {
        400 | 422 => InferenceError::InvalidRequest {
            message: body.to_string(),
        },
        404 => InferenceError::NotFound {
            message: body.to_string(),
        },
        408 | 504 => InferenceError::Timeout {
            message: format!("HTTP {}: {}", status, body),
        },
        500..=599 => InferenceError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => InferenceError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
