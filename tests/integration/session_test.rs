//! Session Controller Integration Tests
//!
//! One analysis in flight at a time, stale outcomes discarded after a reset
//! or language change, and failures replacing the result set.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;

use sentiment_insight::services::{AnalysisOutcome, SessionController};
use sentiment_insight_core::CoreError;

use crate::support::ScriptedService;

/// Wait until the controller reports an analysis in flight.
async fn wait_for_loading(controller: &SessionController) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !controller.snapshot().await.loading {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("analysis never started");
}

#[tokio::test]
async fn test_second_submission_rejected_while_in_flight() {
    let gate = Arc::new(Semaphore::new(0));
    let service = Arc::new(ScriptedService::keyword().gated(gate.clone()));
    let controller = Arc::new(SessionController::new(service.clone(), "en"));

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.analyze("I am tired").await })
    };
    wait_for_loading(&controller).await;

    let err = controller.analyze("another").await.unwrap_err();
    assert!(matches!(err, CoreError::AnalysisInFlight));

    gate.add_permits(1);
    let outcome = first.await.unwrap().unwrap();
    assert!(matches!(outcome, AnalysisOutcome::Completed(_)));
    assert_eq!(service.call_count(), 1);

    let state = controller.snapshot().await;
    assert!(!state.loading);
    assert_eq!(state.results.len(), 1);
}

#[tokio::test]
async fn test_language_change_discards_in_flight_result() {
    let gate = Arc::new(Semaphore::new(0));
    let service = Arc::new(ScriptedService::keyword().gated(gate.clone()));
    let controller = Arc::new(SessionController::new(service, "en"));

    let pending = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.analyze("I feel hopeless\nI am tired").await })
    };
    wait_for_loading(&controller).await;

    let switched = controller.change_language("hi").await;
    assert_eq!(switched.language, "hi");
    assert!(switched.input.is_empty());
    assert!(!switched.loading);

    gate.add_permits(1);
    let outcome = pending.await.unwrap().unwrap();
    assert_eq!(outcome, AnalysisOutcome::Discarded);

    let state = controller.snapshot().await;
    assert!(state.results.is_empty());
    assert!(state.error.is_none());
    assert_eq!(state.language, "hi");
}

#[tokio::test]
async fn test_reset_allows_new_submission_and_discards_old() {
    let gate = Arc::new(Semaphore::new(0));
    let service = Arc::new(ScriptedService::keyword().gated(gate.clone()));
    let controller = Arc::new(SessionController::new(service, "en"));

    let stale = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.analyze("old statement").await })
    };
    wait_for_loading(&controller).await;
    controller.reset().await;

    let fresh = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.analyze("I am tired").await })
    };
    wait_for_loading(&controller).await;

    // Release both calls
    gate.add_permits(2);

    let stale = stale.await.unwrap().unwrap();
    let fresh = fresh.await.unwrap().unwrap();
    assert_eq!(stale, AnalysisOutcome::Discarded);
    assert!(matches!(fresh, AnalysisOutcome::Completed(_)));

    let state = controller.snapshot().await;
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].text(), "I am tired");
}

#[tokio::test]
async fn test_new_results_replace_previous_set() {
    let controller = SessionController::new(Arc::new(ScriptedService::keyword()), "en");

    controller.analyze("a\nb\nc").await.unwrap();
    assert_eq!(controller.snapshot().await.summary().total, 3);

    controller.analyze("I feel hopeless").await.unwrap();
    let state = controller.snapshot().await;
    assert_eq!(state.summary().total, 1);
    assert_eq!(state.summary().count("High"), 1);
}

#[tokio::test]
async fn test_failure_replaces_results_with_localized_message() {
    let controller = SessionController::new(Arc::new(ScriptedService::keyword()), "hi");
    controller.analyze("a\nb").await.unwrap();

    let too_many: String = (0..21).map(|i| format!("line {}\n", i)).collect();
    let err = controller.analyze(&too_many).await.unwrap_err();
    assert!(err.is_validation());

    let state = controller.snapshot().await;
    assert!(state.results.is_empty());
    assert_eq!(state.error.as_deref(), Some("अधिकतम 20 कथनों की अनुमति है।"));
}

#[tokio::test]
async fn test_auto_language_follows_detection() {
    let controller = SessionController::new(Arc::new(ScriptedService::keyword()), "auto");
    controller.analyze("hello").await.unwrap();

    let state = controller.snapshot().await;
    assert_eq!(state.effective_language(), "en");
    assert_eq!(state.ui_text().language, "en");
}

#[tokio::test]
async fn test_timed_out_analysis_releases_session() {
    let gate = Arc::new(Semaphore::new(0));
    let service = Arc::new(ScriptedService::keyword().gated(gate.clone()));
    let controller = SessionController::new(service.clone(), "en");

    let timed_out =
        tokio::time::timeout(Duration::from_millis(100), controller.analyze("I am tired")).await;
    assert!(timed_out.is_err());

    let state = controller.snapshot().await;
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Unable to reach backend service."));
    assert!(state.results.is_empty());

    gate.add_permits(1);
    let outcome = controller.analyze("hello").await.unwrap();
    assert!(matches!(outcome, AnalysisOutcome::Completed(_)));
    assert_eq!(controller.snapshot().await.results[0].text(), "hello");
}

#[tokio::test]
async fn test_cancelled_analysis_after_reset_keeps_new_state() {
    let gate = Arc::new(Semaphore::new(0));
    let service = Arc::new(ScriptedService::keyword().gated(gate.clone()));
    let controller = Arc::new(SessionController::new(service, "en"));

    let pending = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.analyze("old statement").await })
    };
    wait_for_loading(&controller).await;
    controller.change_language("ta").await;

    pending.abort();
    assert!(pending.await.unwrap_err().is_cancelled());

    let state = controller.snapshot().await;
    assert_eq!(state.language, "ta");
    assert!(!state.loading);
    assert!(state.error.is_none());
}
