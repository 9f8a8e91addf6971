//! Scripted analysis backends for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Semaphore;

use sentiment_insight_core::RawAnalysisResult;
use sentiment_insight_inference::{AnalysisService, InferenceError, InferenceResult};

/// Builds a payload for a statement from the statement itself.
pub type Responder = dyn Fn(&str) -> Value + Send + Sync;

/// Backend that answers from a responder function and can be held open.
pub struct ScriptedService {
    responder: Box<Responder>,
    /// When set, each call consumes one permit before answering
    gate: Option<Arc<Semaphore>>,
    /// Return this many results for a batch instead of one per statement
    batch_len: Option<usize>,
    unreachable: bool,
    pub calls: AtomicUsize,
}

impl ScriptedService {
    pub fn new(responder: impl Fn(&str) -> Value + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            gate: None,
            batch_len: None,
            unreachable: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every statement gets a severity matching its keyword
    pub fn keyword() -> Self {
        Self::new(keyword_payload)
    }

    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_batch_len(mut self, len: usize) -> Self {
        self.batch_len = Some(len);
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) -> InferenceResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(InferenceError::network)?
                .forget();
        }
        if self.unreachable {
            return Err(InferenceError::network("connection refused"));
        }
        Ok(())
    }

    fn respond(&self, text: &str) -> InferenceResult<RawAnalysisResult> {
        serde_json::from_value((self.responder)(text)).map_err(InferenceError::parse)
    }
}

#[async_trait]
impl AnalysisService for ScriptedService {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn analyze(&self, text: &str) -> InferenceResult<RawAnalysisResult> {
        self.enter().await?;
        self.respond(text)
    }

    async fn analyze_batch(&self, texts: &[String]) -> InferenceResult<Vec<RawAnalysisResult>> {
        self.enter().await?;
        let results = texts
            .iter()
            .map(|t| self.respond(t))
            .collect::<InferenceResult<Vec<_>>>()?;

        match self.batch_len {
            Some(len) if len != results.len() => Err(InferenceError::MisalignedBatch {
                expected: texts.len(),
                actual: len,
            }),
            _ => Ok(results),
        }
    }

    async fn health_check(&self) -> InferenceResult<()> {
        if self.unreachable {
            Err(InferenceError::network("connection refused"))
        } else {
            Ok(())
        }
    }
}

/// Sentiment payload keyed on words in the statement.
pub fn keyword_payload(text: &str) -> Value {
    let lower = text.to_lowercase();
    let (sentiment, severity, confidence) = if lower.contains("hopeless") {
        ("High emotional distress", "High", 0.91)
    } else if lower.contains("tired") {
        ("Low mood or fatigue", "Mild", 0.64)
    } else {
        ("Positive outlook", "Low", 0.88)
    };

    json!({
        "text": text,
        "sentiment": sentiment,
        "confidence": confidence,
        "severity": severity,
        "language": "en",
        "roadmap": [
            {"text": "Talk to someone you trust.", "level": "supportive"},
            {"text": "Drink some water.", "level": "normal"}
        ],
        "youtube_recommendations": [
            {"videoId": format!("vid-{}", text.len()), "title": "Breathing exercise"}
        ]
    })
}
