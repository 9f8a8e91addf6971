//! Application State
//!
//! Holds the loaded configuration, the analysis backend and the session
//! driven by the commands.

use std::sync::Arc;

use sentiment_insight_core::CoreError;
use sentiment_insight_inference::{AnalysisService, HttpAnalysisService};

use crate::models::settings::AppConfig;
use crate::services::session::SessionController;
use crate::utils::error::{AppError, AppResult};

/// Application state shared by all commands
pub struct AppState {
    /// Effective configuration (file values with CLI overrides applied)
    config: AppConfig,
    /// Backend that analyzes statements
    service: Arc<dyn AnalysisService>,
    /// The current analysis session
    session: Arc<SessionController>,
}

impl AppState {
    /// Create state backed by the HTTP inference service described in `config`
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::config)?;
        let service_config = config.service_config()?;
        let service = HttpAnalysisService::new(service_config).map_err(CoreError::from)?;
        Ok(Self::with_service(config, Arc::new(service)))
    }

    /// Create state around an existing backend
    pub fn with_service(config: AppConfig, service: Arc<dyn AnalysisService>) -> Self {
        let session = Arc::new(SessionController::new(service.clone(), config.language.clone()));
        Self {
            config,
            service,
            session,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn service(&self) -> &Arc<dyn AnalysisService> {
        &self.service
    }

    pub fn session(&self) -> &Arc<SessionController> {
        &self.session
    }
}
