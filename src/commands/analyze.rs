//! Analysis Commands
//!
//! Submit statements, switch language and reset the session.

use serde::Serialize;

use sentiment_insight_analysis::{NormalizedResult, SessionSummary};

use crate::models::response::CommandResponse;
use crate::services::locale::user_message;
use crate::services::session::{AnalysisOutcome, SessionState};
use crate::state::AppState;

/// Results of one Analyze action
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Effective language code ("auto" resolved)
    pub language: String,
    pub results: Vec<NormalizedResult>,
    pub summary: SessionSummary,
}

impl From<&SessionState> for AnalysisReport {
    fn from(state: &SessionState) -> Self {
        Self {
            language: state.effective_language().to_string(),
            results: state.results.to_vec(),
            summary: state.summary(),
        }
    }
}

/// Analyze newline-separated statements in the current session.
///
/// Failures carry the localized user-visible message.
pub async fn analyze_statements(state: &AppState, input: &str) -> CommandResponse<AnalysisReport> {
    let session = state.session();
    match session.analyze(input).await {
        Ok(AnalysisOutcome::Completed(snapshot)) => CommandResponse::ok(AnalysisReport::from(&snapshot)),
        Ok(AnalysisOutcome::Discarded) => {
            let snapshot = session.snapshot().await;
            CommandResponse::err(snapshot.ui_text().error_discarded)
        }
        Err(e) => {
            let snapshot = session.snapshot().await;
            CommandResponse::err(user_message(&e, snapshot.ui_text()))
        }
    }
}

/// Switch the session language; clears input, results and error.
pub async fn set_language(state: &AppState, code: &str) -> CommandResponse<String> {
    let snapshot = state.session().change_language(code).await;
    CommandResponse::ok(snapshot.language)
}

/// Clear the session.
pub async fn reset_session(state: &AppState) -> CommandResponse<bool> {
    state.session().reset().await;
    CommandResponse::ok(true)
}
