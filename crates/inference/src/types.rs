//! Inference Types
//!
//! Error and response types for calls to the inference service.

use sentiment_insight_core::{CoreError, RawAnalysisResult};
use thiserror::Error;

/// Errors from a single call to the inference service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// Connection could not be established or was interrupted
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// The configured timeout elapsed before a response arrived
    #[error("Request timed out: {message}")]
    Timeout { message: String },

    /// The service rejected the request body (HTTP 400/422)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// The endpoint does not exist on this service (HTTP 404)
    #[error("Endpoint not found: {message}")]
    NotFound { message: String },

    /// The service failed while handling the request (HTTP 5xx)
    #[error("Server error: {message}")]
    ServerError { message: String, status: Option<u16> },

    /// The response body is not the expected JSON envelope
    #[error("Parse error: {message}")]
    ParseError { message: String },

    /// A batch response does not line up with the request
    #[error("Batch response has {actual} results for {expected} statements")]
    MisalignedBatch { expected: usize, actual: usize },

    /// Any other non-success status
    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for inference calls
pub type InferenceResult<T> = Result<T, InferenceError>;

impl InferenceError {
    pub fn network(e: impl std::fmt::Display) -> Self {
        Self::NetworkError {
            message: e.to_string(),
        }
    }

    pub fn parse(e: impl std::fmt::Display) -> Self {
        Self::ParseError {
            message: e.to_string(),
        }
    }
}

/// Everything except a misaligned batch is a transport failure; a
/// misaligned batch means the payload itself cannot be rendered.
impl From<InferenceError> for CoreError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::MisalignedBatch { .. } => CoreError::malformed(err.to_string()),
            other => CoreError::transport(other.to_string()),
        }
    }
}

/// Raw output of `submit`, shaped like the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResponse {
    Single(RawAnalysisResult),
    Batch(Vec<RawAnalysisResult>),
}

impl AnalysisResponse {
    /// Flatten into an ordered list, one entry per submitted statement.
    pub fn into_results(self) -> Vec<RawAnalysisResult> {
        match self {
            AnalysisResponse::Single(result) => vec![result],
            AnalysisResponse::Batch(results) => results,
        }
    }
}
