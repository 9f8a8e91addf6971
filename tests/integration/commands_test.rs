//! Command Layer Integration Tests

use std::sync::Arc;

use serde_json::json;

use sentiment_insight::commands::{
    analyze_statements, get_health, get_settings, get_ui_text, list_languages, reset_session,
    reset_settings, set_language, update_settings,
};
use sentiment_insight::storage::ConfigService;
use sentiment_insight::{AppConfig, AppState, SettingsUpdate};

use crate::support::ScriptedService;

fn state_with(service: ScriptedService) -> AppState {
    AppState::with_service(AppConfig::default(), Arc::new(service))
}

#[tokio::test]
async fn test_analyze_statements_report() {
    let state = state_with(ScriptedService::keyword());
    let response = analyze_statements(&state, "I feel hopeless\nI feel hopeless\nI am tired").await;

    assert!(response.success);
    let report = response.data.unwrap();
    assert_eq!(report.language, "en");
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.count("High"), 2);
    assert_eq!(report.summary.count("Mild"), 1);
}

#[tokio::test]
async fn test_report_json_shape() {
    let state = state_with(ScriptedService::keyword());
    let response = analyze_statements(&state, "I am tired").await;
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(true));
    let result = &value["data"]["results"][0];
    assert_eq!(result["shape"], json!("sentiment"));
    assert_eq!(result["severity"], json!("Mild"));
    assert_eq!(result["sentiment"], json!("low"));
    assert_eq!(result["roadmap"][0]["level"], json!("supportive"));
    assert_eq!(result["youtubeRecommendations"][0]["videoId"], json!("vid-10"));
    assert_eq!(value["data"]["summary"]["perTier"]["Mild"], json!(1));
}

#[tokio::test]
async fn test_empty_input_error_message() {
    let service = ScriptedService::keyword();
    let state = state_with(service);
    let response = analyze_statements(&state, "\n   \n").await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Please enter at least one statement."));
}

#[tokio::test]
async fn test_unreachable_service_message_is_localized() {
    let state = state_with(ScriptedService::keyword().unreachable());
    set_language(&state, "hi").await;

    let response = analyze_statements(&state, "a").await;
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("बैकएंड सेवा से संपर्क नहीं हो सका।"));
}

#[tokio::test]
async fn test_reset_session_clears_results() {
    let state = state_with(ScriptedService::keyword());
    analyze_statements(&state, "a\nb").await;
    assert_eq!(state.session().snapshot().await.results.len(), 2);

    assert!(reset_session(&state).await.success);
    let snapshot = state.session().snapshot().await;
    assert!(snapshot.results.is_empty());
    assert!(snapshot.input.is_empty());
}

#[tokio::test]
async fn test_health_reports_backend_status() {
    let healthy = get_health(&state_with(ScriptedService::keyword())).await;
    assert!(healthy.data.unwrap().inference);

    let degraded = get_health(&state_with(ScriptedService::keyword().unreachable())).await;
    let health = degraded.data.unwrap();
    assert!(!health.inference);
    assert_eq!(health.status, "degraded");
}

#[test]
fn test_locale_commands() {
    assert_eq!(get_ui_text("auto").data.unwrap().feeling, "How are you feeling today?");
    assert_eq!(get_ui_text("xx").data, get_ui_text("en").data);
    assert_eq!(list_languages().data.unwrap().len(), 12);
}

#[test]
fn test_settings_update_and_reset_persist() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    let mut config = ConfigService::from_path(&path).unwrap();
    assert_eq!(get_settings(&config).data, Some(AppConfig::default()));

    let update = SettingsUpdate {
        service_url: Some("http://10.0.0.5:9000".to_string()),
        proxy: Some("http://proxy.local:3128".to_string()),
        language: Some("hi".to_string()),
        ..Default::default()
    };
    let response = update_settings(&mut config, update);
    assert!(response.success);
    assert_eq!(response.data.unwrap().language, "hi");

    let reloaded = ConfigService::from_path(&path).unwrap();
    assert_eq!(reloaded.get_config().service_url, "http://10.0.0.5:9000");
    assert_eq!(reloaded.get_config().proxy.as_deref(), Some("http://proxy.local:3128"));

    let cleared = update_settings(
        &mut config,
        SettingsUpdate {
            proxy: Some(String::new()),
            ..Default::default()
        },
    );
    assert_eq!(cleared.data.unwrap().proxy, None);

    let response = reset_settings(&mut config);
    assert_eq!(response.data, Some(AppConfig::default()));
    let reloaded = ConfigService::from_path(&path).unwrap();
    assert_eq!(reloaded.get_config(), &AppConfig::default());
}

#[test]
fn test_invalid_settings_update_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");
    let mut config = ConfigService::from_path(&path).unwrap();

    let response = update_settings(
        &mut config,
        SettingsUpdate {
            language: Some("zz".to_string()),
            ..Default::default()
        },
    );
    assert!(!response.success);
    assert!(response.error.unwrap().contains("zz"));
    assert_eq!(get_settings(&config).data.unwrap().language, "auto");
}
