//! Sentiment Insight - Application Library
//!
//! Backend of the `sentiment-insight` command line tool:
//! - Command handlers returning `CommandResponse`
//! - Session, locale and rendering services
//! - Storage layer (JSON config)
//! - Data models and utilities
//!
//! The analysis pipeline itself lives in the workspace crates
//! `sentiment-insight-core`, `sentiment-insight-analysis` and
//! `sentiment-insight-inference`.

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items from commands
pub use commands::{
    // Analysis commands
    analyze_statements, reset_session, set_language, AnalysisReport,
    // Locale commands
    get_ui_text, list_languages,
    // Health commands
    get_health,
    // Settings commands
    get_settings, reset_settings, update_settings,
};
pub use models::response::*;
pub use models::settings::{AppConfig, SettingsUpdate};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
