//! HTTP Client Factory
//!
//! Builds the reqwest client used to reach the inference service.

use std::time::Duration;

use sentiment_insight_core::ServiceConfig;

use crate::types::{InferenceError, InferenceResult};

/// Build a `reqwest::Client` from the service configuration.
///
/// - `timeout_secs: Some(n)` -> every request is cancelled after `n` seconds
/// - `proxy: Some(url)` -> all traffic goes through the proxy
/// - `proxy: None` -> proxy environment variables are ignored
pub fn build_http_client(config: &ServiceConfig) -> InferenceResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    match &config.proxy {
        Some(url) => {
            let proxy = reqwest::Proxy::all(url).map_err(|e| InferenceError::Other {
                message: format!("Invalid proxy URL '{}': {}", url, e),
            })?;
            builder = builder.proxy(proxy);
        }
        None => {
            builder = builder.no_proxy();
        }
    }

    builder.build().map_err(|e| InferenceError::Other {
        message: format!("Failed to build HTTP client: {}", e),
    })
}
