//! Settings Commands
//!
//! Commands for reading, updating and resetting the persisted configuration.

use crate::models::response::CommandResponse;
use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::storage::ConfigService;

/// Get current application settings
pub fn get_settings(config: &ConfigService) -> CommandResponse<AppConfig> {
    CommandResponse::ok(config.get_config().clone())
}

/// Update application settings with a partial update
///
/// An update that fails validation is rejected and nothing is written.
pub fn update_settings(
    config: &mut ConfigService,
    update: SettingsUpdate,
) -> CommandResponse<AppConfig> {
    match config.update_config(update) {
        Ok(updated) => {
            tracing::info!("Settings saved to {}", config.path().display());
            CommandResponse::ok(updated)
        }
        Err(e) => {
            tracing::warn!("Settings update rejected: {}", e);
            CommandResponse::err(e.to_string())
        }
    }
}

/// Restore the default settings and persist them
pub fn reset_settings(config: &mut ConfigService) -> CommandResponse<AppConfig> {
    config
        .reset()
        .map(|()| config.get_config().clone())
        .into()
}
