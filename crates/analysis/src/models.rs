//! Analysis Models
//!
//! Canonical records produced by the normalizer and consumed by renderers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Base URL for video links built from a `videoId`.
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

// ============================================================================
// Enums
// ============================================================================

/// Coarse sentiment bucket derived from the service's free-form label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizedSentiment {
    Positive,
    Low,
    Distress,
    Neutral,
}

impl std::fmt::Display for NormalizedSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizedSentiment::Positive => write!(f, "positive"),
            NormalizedSentiment::Low => write!(f, "low"),
            NormalizedSentiment::Distress => write!(f, "distress"),
            NormalizedSentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Emotional-risk intensity of one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    Low,
    Mild,
    High,
}

impl SeverityTier {
    /// Label as shown to users and used as the aggregation key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Low => "Low",
            SeverityTier::Mild => "Mild",
            SeverityTier::High => "High",
        }
    }

    /// Parse a service-supplied severity, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not one of the three tiers.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(SeverityTier::Low),
            "mild" => Some(SeverityTier::Mild),
            "high" => Some(SeverityTier::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-step classification driving emphasis and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationTier {
    Critical,
    Supportive,
    /// Everything else, including the service's `normal` level
    Routine,
}

impl PresentationTier {
    /// Classify a raw step level. Unknown and absent levels are routine.
    pub fn from_level(level: Option<&str>) -> Self {
        match level.map(|l| l.trim().to_ascii_lowercase()) {
            Some(l) if l == "critical" => PresentationTier::Critical,
            Some(l) if l == "supportive" => PresentationTier::Supportive,
            _ => PresentationTier::Routine,
        }
    }
}

/// Badge tier for the clinical-risk response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    HighConcern,
    Uncertain,
    Safe,
}

impl RiskTier {
    /// Map a literal `risk_level`. Anything unrecognized is the safe tier.
    pub fn from_level(level: Option<&str>) -> Self {
        match level.map(str::trim) {
            Some("High Concern") => RiskTier::HighConcern,
            Some("Uncertain") => RiskTier::Uncertain,
            _ => RiskTier::Safe,
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// One recommendation in the guided workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub text: String,
    pub level: PresentationTier,
}

/// A supplementary video link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub title: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    pub channel: String,
    /// Display string, e.g. "1.2M views"
    pub views: String,
    /// Display string, e.g. "3 years ago"
    pub published: String,
}

impl VideoRef {
    pub fn watch_url(&self) -> String {
        format!("{}{}", YOUTUBE_WATCH_URL, self.video_id)
    }
}

/// Renderer-ready result for the sentiment response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalResult {
    /// The analyzed statement, verbatim
    pub text: String,
    pub sentiment: NormalizedSentiment,
    /// The service's original label, kept for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_label: Option<String>,
    pub severity: SeverityTier,
    /// Always within [0, 1]
    pub confidence: f64,
    pub roadmap: Vec<WorkflowStep>,
    pub youtube_recommendations: Vec<VideoRef>,
    /// Language detected by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Renderer-ready result for the clinical-risk response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub text: String,
    /// Literal label from the service, e.g. "High Concern"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    pub risk_tier: RiskTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Label used when a risk payload carries no `risk_level`.
pub const UNKNOWN_TIER_LABEL: &str = "Unknown";

/// Either canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum NormalizedResult {
    Sentiment(CanonicalResult),
    Risk(RiskAssessment),
}

impl NormalizedResult {
    pub fn text(&self) -> &str {
        match self {
            NormalizedResult::Sentiment(r) => &r.text,
            NormalizedResult::Risk(r) => &r.text,
        }
    }

    /// The tier label this result is counted under in a session summary.
    pub fn tier_label(&self) -> &str {
        match self {
            NormalizedResult::Sentiment(r) => r.severity.as_str(),
            NormalizedResult::Risk(r) => r.risk_level.as_deref().unwrap_or(UNKNOWN_TIER_LABEL),
        }
    }

    pub fn as_sentiment(&self) -> Option<&CanonicalResult> {
        match self {
            NormalizedResult::Sentiment(r) => Some(r),
            NormalizedResult::Risk(_) => None,
        }
    }

    pub fn as_risk(&self) -> Option<&RiskAssessment> {
        match self {
            NormalizedResult::Risk(r) => Some(r),
            NormalizedResult::Sentiment(_) => None,
        }
    }
}

/// Counts across all results of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total: usize,
    /// Tier label to number of results carrying it
    pub per_tier: BTreeMap<String, usize>,
}

impl SessionSummary {
    /// Count for a tier label, zero when absent.
    pub fn count(&self, label: &str) -> usize {
        self.per_tier.get(label).copied().unwrap_or(0)
    }
}
