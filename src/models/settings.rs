//! Settings Models
//!
//! Application configuration stored in config.json.

use serde::{Deserialize, Serialize};

use sentiment_insight_core::{CoreResult, ServiceConfig, ServiceConfigBuilder, DEFAULT_SERVICE_URL};

use crate::services::locale::is_supported_language;

/// Application configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the inference service
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Per-request timeout in seconds; absent means no timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Optional proxy URL for requests to the inference service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// Selected language code ("auto" or one of the supported codes)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_language() -> String {
    "auto".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            timeout_secs: None,
            proxy: None,
            language: default_language(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub service_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub proxy: Option<String>,
    pub language: Option<String>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(url) = update.service_url {
            self.service_url = url;
        }
        if let Some(secs) = update.timeout_secs {
            self.timeout_secs = Some(secs);
        }
        if let Some(proxy) = update.proxy {
            self.proxy = if proxy.trim().is_empty() {
                None
            } else {
                Some(proxy)
            };
        }
        if let Some(language) = update.language {
            self.language = language;
        }
    }

    /// Build the validated network-facing subset of the configuration
    pub fn service_config(&self) -> CoreResult<ServiceConfig> {
        ServiceConfigBuilder::new()
            .base_url(&self.service_url)
            .maybe_timeout_secs(self.timeout_secs)
            .maybe_proxy(self.proxy.clone())
            .build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.service_config().map_err(|e| e.to_string())?;

        if !is_supported_language(&self.language) {
            return Err(format!("Invalid language code: {}", self.language));
        }

        Ok(())
    }
}
