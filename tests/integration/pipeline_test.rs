//! Pipeline Integration Tests
//!
//! Raw textarea input through batching, the backend, normalization and
//! aggregation, without the session layer.

use serde_json::json;

use sentiment_insight_analysis::{
    aggregate, batch, normalize_all, NormalizedResult, PresentationTier, RiskTier, SeverityTier,
};
use sentiment_insight_core::{AnalysisRequest, CoreError, RawAnalysisResult};
use sentiment_insight_inference::AnalysisService;

use crate::support::ScriptedService;

async fn run(service: &ScriptedService, input: &str) -> Result<Vec<NormalizedResult>, CoreError> {
    let request = batch(input)?.into_request();
    let response = service.submit(&request).await.map_err(CoreError::from)?;
    normalize_all(response.into_results())
}

// ============================================================================
// Batching
// ============================================================================

#[test]
fn test_batch_boundaries() {
    let twenty: String = (1..=20).map(|i| format!("statement {}\n", i)).collect();
    assert_eq!(batch(&twenty).unwrap().len(), 20);

    let twenty_one = format!("{}one more", twenty);
    assert!(matches!(
        batch(&twenty_one),
        Err(CoreError::TooManyStatements { count: 21, max: 20 })
    ));

    assert!(matches!(batch("   \n\t\n"), Err(CoreError::EmptyInput)));
}

#[test]
fn test_single_statement_uses_single_mode() {
    let request = batch("\n  only one  \n\n").unwrap().into_request();
    assert_eq!(request, AnalysisRequest::single("only one"));
    assert_eq!(request.path(), "/analyze");

    let request = batch("a\nb").unwrap().into_request();
    assert_eq!(request.path(), "/analyze-batch");
}

// ============================================================================
// End to end
// ============================================================================

#[tokio::test]
async fn test_batch_results_align_with_input() {
    let service = ScriptedService::keyword();
    let results = run(&service, "I feel hopeless\n\nI am tired\nGreat day").await.unwrap();

    let texts: Vec<_> = results.iter().map(|r| r.text()).collect();
    assert_eq!(texts, vec!["I feel hopeless", "I am tired", "Great day"]);

    let summary = aggregate(&results);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.count("High"), 1);
    assert_eq!(summary.count("Mild"), 1);
    assert_eq!(summary.count("Low"), 1);
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn test_missing_severity_is_derived() {
    let service = ScriptedService::new(|text| {
        json!({"text": text, "sentiment": "High emotional distress", "confidence": 0.8})
    });
    let results = run(&service, "x\ny").await.unwrap();

    for result in &results {
        let canonical = result.as_sentiment().unwrap();
        assert_eq!(canonical.severity, SeverityTier::High);
        assert!(canonical.roadmap.is_empty());
        assert!(canonical.youtube_recommendations.is_empty());
    }
}

#[tokio::test]
async fn test_distress_below_threshold_is_low() {
    let service = ScriptedService::new(|text| {
        json!({"text": text, "sentiment": "High emotional distress", "confidence": 0.5})
    });
    let results = run(&service, "x").await.unwrap();
    assert_eq!(results[0].as_sentiment().unwrap().severity, SeverityTier::Low);
}

#[tokio::test]
async fn test_roadmap_levels_map_to_tiers() {
    let service = ScriptedService::new(|text| {
        json!({
            "text": text,
            "severity": "High",
            "roadmap": [
                {"text": "Call a helpline now.", "level": "critical"},
                {"text": "Reach out to a friend.", "level": "supportive"},
                {"text": "Go for a walk.", "level": "normal"},
                {"text": "Unknown level.", "level": "whatever"},
                {"level": "critical"}
            ]
        })
    });
    let results = run(&service, "x").await.unwrap();
    let levels: Vec<_> = results[0]
        .as_sentiment()
        .unwrap()
        .roadmap
        .iter()
        .map(|s| s.level)
        .collect();

    assert_eq!(
        levels,
        vec![
            PresentationTier::Critical,
            PresentationTier::Supportive,
            PresentationTier::Routine,
            PresentationTier::Routine,
        ]
    );
}

#[tokio::test]
async fn test_risk_shape_passes_through() {
    let service = ScriptedService::new(|text| {
        json!({
            "text": text,
            "risk_level": "High Concern",
            "risk_score": 0.93,
            "recommendation": "Please contact a mental health professional."
        })
    });
    let results = run(&service, "a\nb").await.unwrap();

    let risk = results[0].as_risk().unwrap();
    assert_eq!(risk.risk_tier, RiskTier::HighConcern);
    assert_eq!(risk.risk_score, Some(0.93));
    assert_eq!(aggregate(&results).count("High Concern"), 2);
}

#[tokio::test]
async fn test_wrong_typed_fields_fall_back_to_defaults() {
    let service = ScriptedService::new(|text| {
        json!({
            "text": text,
            "sentiment": "Low mood or fatigue",
            "severity": 2,
            "confidence": "n/a",
            "roadmap": "none",
            "youtube_recommendations": [{"videoId": "v1", "title": 5}]
        })
    });
    let results = run(&service, "x\ny").await.unwrap();
    assert_eq!(results.len(), 2);

    let canonical = results[0].as_sentiment().unwrap();
    assert_eq!(canonical.severity, SeverityTier::Mild);
    assert_eq!(canonical.confidence, 0.0);
    assert!(canonical.roadmap.is_empty());
    assert_eq!(canonical.youtube_recommendations[0].video_id, "v1");
    assert_eq!(canonical.youtube_recommendations[0].title, "");
}

#[tokio::test]
async fn test_non_string_text_is_malformed() {
    let service = ScriptedService::new(|_| json!({"text": 7, "severity": "Low"}));
    let err = run(&service, "a").await.unwrap_err();
    assert!(matches!(err, CoreError::MalformedResult(_)));
}

#[tokio::test]
async fn test_one_malformed_result_fails_all() {
    let service = ScriptedService::new(|text| {
        if text == "bad" {
            json!({"sentiment": "Positive outlook"})
        } else {
            json!({"text": text, "severity": "Low"})
        }
    });
    let err = run(&service, "good\nbad\ngood").await.unwrap_err();
    assert!(matches!(err, CoreError::MalformedResult(_)));
}

#[tokio::test]
async fn test_misaligned_batch_is_malformed() {
    let service = ScriptedService::keyword().with_batch_len(2);
    let err = run(&service, "a\nb\nc").await.unwrap_err();
    assert!(matches!(err, CoreError::MalformedResult(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let service = ScriptedService::keyword().unreachable();
    let err = run(&service, "a").await.unwrap_err();
    assert!(matches!(err, CoreError::Transport(_)));
}

#[test]
fn test_canonical_round_trip_keeps_text_and_severity() {
    let raw: RawAnalysisResult = serde_json::from_value(json!({
        "text": "I am tired",
        "sentiment": "Low mood or fatigue",
        "confidence": "0.64"
    }))
    .unwrap();
    let first = normalize_all(vec![raw]).unwrap();
    let canonical = first[0].as_sentiment().unwrap();

    let reparsed: RawAnalysisResult =
        serde_json::from_value(serde_json::to_value(canonical).unwrap()).unwrap();
    let second = normalize_all(vec![reparsed]).unwrap();
    let again = second[0].as_sentiment().unwrap();

    assert_eq!(again.text, canonical.text);
    assert_eq!(again.severity, canonical.severity);
    assert_eq!(again.severity, SeverityTier::Mild);
}

#[test]
fn test_risk_round_trip_keeps_shape() {
    for payload in [
        json!({"text": "x", "risk_level": "Moderate Concern", "risk_score": 0.55,
               "recommendation": "Talk to someone."}),
        json!({"text": "x", "risk_level": "Low Concern", "risk_score": 0.12}),
        json!({"text": "x", "recommendation": "Keep a journal."}),
    ] {
        let raw: RawAnalysisResult = serde_json::from_value(payload).unwrap();
        let first = normalize_all(vec![raw]).unwrap();
        let risk = first[0].as_risk().unwrap();

        let reparsed: RawAnalysisResult =
            serde_json::from_value(serde_json::to_value(risk).unwrap()).unwrap();
        let second = normalize_all(vec![reparsed]).unwrap();

        assert_eq!(second[0].as_risk(), Some(risk));
        assert_eq!(second[0].tier_label(), first[0].tier_label());
    }
}
