//! Sentiment Insight Inference
//!
//! Client side of the external inference service contract:
//! - `AnalysisService` trait, the seam between the session and the network
//! - `HttpAnalysisService`, the reqwest-backed implementation
//! - HTTP client factory honoring timeout and proxy settings
//!
//! Calls are never retried. A failure surfaces immediately so the user can
//! decide whether to resubmit.

pub mod http;
pub mod http_client;
pub mod provider;
pub mod types;

pub use http::HttpAnalysisService;
pub use http_client::build_http_client;
pub use provider::{parse_http_error, AnalysisService};
pub use types::{AnalysisResponse, InferenceError, InferenceResult};
