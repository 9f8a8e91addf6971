//! Inference Service Wire Types
//!
//! Request and response bodies exchanged with the external inference service.
//!
//! Responses are untrusted: every field is optional, and fields that arrive
//! with the wrong JSON type are read as absent instead of rejecting the
//! whole payload. Deciding what a payload *means* is the job of the
//! normalizer in the analysis crate.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Maximum number of statements accepted by `POST /analyze-batch`.
pub const MAX_BATCH_SIZE: usize = 20;

// ============================================================================
// Requests
// ============================================================================

/// Body of an analysis request.
///
/// Serializes to `{"text": ...}` for single mode and `{"texts": [...]}` for
/// batch mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisRequest {
    Single { text: String },
    Batch { texts: Vec<String> },
}

impl AnalysisRequest {
    pub fn single(text: impl Into<String>) -> Self {
        Self::Single { text: text.into() }
    }

    pub fn batch(texts: Vec<String>) -> Self {
        Self::Batch { texts }
    }

    /// Endpoint path this request is posted to.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Single { .. } => "/analyze",
            Self::Batch { .. } => "/analyze-batch",
        }
    }

    /// Number of statements carried.
    pub fn len(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Batch { texts } => texts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Responses
// ============================================================================

/// One workflow step as sent by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWorkflowStep {
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
    /// `critical`, `supportive`, `normal`/`routine`, or absent
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<String>,
}

/// Video metadata as sent by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVideo {
    #[serde(
        rename = "videoId",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub channel: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub views: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub published: Option<String>,
}

/// A single analysis result as returned by the service.
///
/// Two shapes are observed in the wild: the sentiment shape
/// (`sentiment`/`severity`/`confidence`/`roadmap`) and the clinical-risk
/// shape (`risk_level`/`risk_score`/`recommendation`). Both deserialize
/// into this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysisResult {
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub sentiment: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub severity: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<f64>,
    #[serde(
        default,
        alias = "riskLevel",
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_level: Option<String>,
    #[serde(
        default,
        alias = "riskScore",
        deserialize_with = "lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommendation: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_seq",
        skip_serializing_if = "Option::is_none"
    )]
    pub roadmap: Option<Vec<RawWorkflowStep>>,
    #[serde(
        default,
        alias = "youtubeRecommendations",
        deserialize_with = "lenient_seq",
        skip_serializing_if = "Option::is_none"
    )]
    pub youtube_recommendations: Option<Vec<RawVideo>>,
    /// Language detected by the service for this statement
    #[serde(
        default,
        deserialize_with = "string_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,
}

impl RawAnalysisResult {
    /// True when the payload uses the clinical-risk shape.
    ///
    /// A risk field must be present and neither `severity` nor `roadmap`
    /// may be; a payload carrying both vocabularies is read as the
    /// sentiment shape.
    pub fn is_risk_shape(&self) -> bool {
        let has_risk = self.risk_level.is_some()
            || self.risk_score.is_some()
            || self.recommendation.is_some();
        has_risk && self.severity.is_none() && self.roadmap.is_none()
    }
}

/// Body of a `POST /analyze-batch` response.
///
/// A missing or non-array `results` reads as an empty list; the client then
/// reports the misalignment with the request. Elements that are not objects
/// keep their position as empty payloads so they fail normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysisResponse {
    #[serde(default, deserialize_with = "lenient_results")]
    pub results: Vec<RawAnalysisResult>,
}

// ============================================================================
// Lenient readers
// ============================================================================

fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|v| v.is_finite()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Non-arrays read as absent; elements that do not fit `T` are skipped.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_results<'de, D>(deserializer: D) -> Result<Vec<RawAnalysisResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}
