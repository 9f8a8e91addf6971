//! Service Configuration
//!
//! Connection settings for the inference service and a builder that
//! validates them.
//!
//! Follows the standard builder pattern used across the workspace:
//! 1. Create with `::new()` or `::default()`
//! 2. Chain `.field(value)` calls
//! 3. Call `.build()` which validates and returns `CoreResult<ServiceConfig>`

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};

/// Default inference service location (local development server).
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

/// Validated connection settings for the inference service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
    /// Optional proxy URL (`http://`, `https://` or `socks5://`)
    pub proxy: Option<String>,
}

impl ServiceConfig {
    /// Full URL for an endpoint path such as `/analyze`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_secs: None,
            proxy: None,
        }
    }
}

/// Builder for [`ServiceConfig`] with validation at build time.
///
/// # Example
/// ```ignore
/// let config = ServiceConfigBuilder::new()
///     .base_url("http://127.0.0.1:8000")
///     .timeout_secs(30)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    proxy: Option<String>,
}

impl ServiceConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service base URL (must be http or https).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (must be > 0).
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set an optional timeout.
    pub fn maybe_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Set an optional proxy.
    pub fn maybe_proxy(mut self, url: Option<String>) -> Self {
        self.proxy = url;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> CoreResult<ServiceConfig> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url)
            .map_err(|e| CoreError::config(format!("Invalid service URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CoreError::config(format!(
                "Service URL must use http or https. Got: '{}'",
                base_url
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(CoreError::config("timeout_secs must be > 0"));
        }

        if let Some(proxy) = &self.proxy {
            let parsed = Url::parse(proxy)
                .map_err(|e| CoreError::config(format!("Invalid proxy URL '{}': {}", proxy, e)))?;
            if !matches!(parsed.scheme(), "http" | "https" | "socks5") {
                return Err(CoreError::config(format!(
                    "Proxy URL must use http, https or socks5. Got: '{}'",
                    proxy
                )));
            }
        }

        Ok(ServiceConfig {
            base_url,
            timeout_secs: self.timeout_secs,
            proxy: self.proxy,
        })
    }
}
