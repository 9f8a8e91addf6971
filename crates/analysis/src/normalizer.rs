//! Result Normalizer
//!
//! Maps untrusted service payloads onto the canonical records renderers
//! consume. Two response shapes are recognized:
//!
//! - **Sentiment shape**: `sentiment`, `severity`, `confidence`, `roadmap`.
//!   A missing or unrecognized `severity` is derived from the raw sentiment
//!   label and the confidence.
//! - **Clinical-risk shape**: `risk_level`, `risk_score`, `recommendation`
//!   and no `severity`/`roadmap`. Passed through with a badge tier; no
//!   roadmap is synthesized.
//!
//! Only a missing `text` is fatal for a payload. Every other field falls
//! back to a documented default.

use sentiment_insight_core::{CoreError, CoreResult, RawAnalysisResult, RawVideo, RawWorkflowStep};

use crate::models::{
    CanonicalResult, NormalizedResult, NormalizedSentiment, PresentationTier, RiskAssessment,
    RiskTier, SeverityTier, VideoRef, WorkflowStep,
};

/// Raw label that can escalate to `High` severity.
const DISTRESS_LABEL: &str = "High emotional distress";
/// Raw label that maps to `Mild` severity.
const LOW_MOOD_LABEL: &str = "Low mood or fatigue";
/// Minimum confidence for a distress label to count as `High`.
const HIGH_SEVERITY_CONFIDENCE: f64 = 0.75;

/// Bucket a free-form sentiment label.
///
/// Case-sensitive substring match, first hit wins: "Positive", then
/// "Low mood", then "High emotional". Anything else, including a missing
/// label, is neutral.
pub fn normalize_sentiment(label: Option<&str>) -> NormalizedSentiment {
    let Some(label) = label else {
        return NormalizedSentiment::Neutral;
    };

    if label.contains("Positive") {
        NormalizedSentiment::Positive
    } else if label.contains("Low mood") {
        NormalizedSentiment::Low
    } else if label.contains("High emotional") {
        NormalizedSentiment::Distress
    } else {
        NormalizedSentiment::Neutral
    }
}

/// Derive a severity tier from the *raw* sentiment label.
///
/// Exact label comparison: a distress label with confidence of at least
/// 0.75 is `High`, the low-mood label is `Mild`, everything else is `Low`.
pub fn normalize_severity(sentiment: Option<&str>, confidence: f64) -> SeverityTier {
    match sentiment {
        Some(DISTRESS_LABEL) if confidence >= HIGH_SEVERITY_CONFIDENCE => SeverityTier::High,
        Some(LOW_MOOD_LABEL) => SeverityTier::Mild,
        _ => SeverityTier::Low,
    }
}

/// Normalize one payload.
///
/// # Errors
/// `MalformedResult` when the payload has no `text`.
pub fn normalize(raw: RawAnalysisResult) -> CoreResult<NormalizedResult> {
    let Some(text) = raw.text.clone() else {
        tracing::warn!("Dropping analysis payload without text");
        return Err(CoreError::malformed("result is missing 'text'"));
    };

    if raw.is_risk_shape() {
        return Ok(NormalizedResult::Risk(RiskAssessment {
            text,
            risk_tier: RiskTier::from_level(raw.risk_level.as_deref()),
            risk_level: raw.risk_level,
            risk_score: raw.risk_score,
            recommendation: raw.recommendation,
        }));
    }

    let confidence = raw.confidence.unwrap_or(0.0).clamp(0.0, 1.0);
    let severity = match raw.severity.as_deref().and_then(SeverityTier::parse_label) {
        Some(tier) => tier,
        None => {
            let derived = normalize_severity(raw.sentiment.as_deref(), confidence);
            tracing::debug!(
                "Derived severity {} from sentiment {:?} (confidence {})",
                derived,
                raw.sentiment,
                confidence
            );
            derived
        }
    };

    Ok(NormalizedResult::Sentiment(CanonicalResult {
        text,
        sentiment: normalize_sentiment(raw.sentiment.as_deref()),
        sentiment_label: raw.sentiment,
        severity,
        confidence,
        roadmap: raw
            .roadmap
            .unwrap_or_default()
            .into_iter()
            .filter_map(to_workflow_step)
            .collect(),
        youtube_recommendations: raw
            .youtube_recommendations
            .unwrap_or_default()
            .into_iter()
            .filter_map(to_video_ref)
            .collect(),
        language: raw.language,
    }))
}

/// Normalize a whole response, all or nothing.
///
/// The first malformed payload fails the call so a partially built result
/// set is never handed to a renderer.
pub fn normalize_all(raws: Vec<RawAnalysisResult>) -> CoreResult<Vec<NormalizedResult>> {
    raws.into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            normalize(raw).map_err(|e| match e {
                CoreError::MalformedResult(msg) => {
                    CoreError::malformed(format!("result {}: {}", idx + 1, msg))
                }
                other => other,
            })
        })
        .collect()
}

fn to_workflow_step(step: RawWorkflowStep) -> Option<WorkflowStep> {
    let text = step.text?.trim().to_string();
    if text.is_empty() {
        return None;
    }
    Some(WorkflowStep {
        text,
        level: PresentationTier::from_level(step.level.as_deref()),
    })
}

fn to_video_ref(video: RawVideo) -> Option<VideoRef> {
    let video_id = video.video_id.filter(|id| !id.trim().is_empty())?;
    Some(VideoRef {
        video_id,
        title: video.title.unwrap_or_default(),
        thumbnail: video.thumbnail.unwrap_or_default(),
        channel: video.channel.unwrap_or_default(),
        views: video.views.unwrap_or_default(),
        published: video.published.unwrap_or_default(),
    })
}
