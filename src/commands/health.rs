//! Health Check Commands
//!
//! Reachability of the inference service.

use crate::models::response::{CommandResponse, HealthResponse};
use crate::state::AppState;

/// Check whether the inference service answers `GET /health`
pub async fn get_health(state: &AppState) -> CommandResponse<HealthResponse> {
    let inference = match state.service().health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Inference service health check failed: {}", e);
            false
        }
    };

    CommandResponse::ok(HealthResponse::new(state.config().service_url.clone(), inference))
}
