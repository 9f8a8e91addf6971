//! Sentiment Insight Analysis
//!
//! The pure half of the analysis pipeline. Nothing in this crate touches the
//! network; every function is a deterministic transformation:
//!
//! - `batcher` - Raw textarea content into a bounded `StatementBatch`
//! - `normalizer` - Untrusted service payloads into `NormalizedResult`s
//! - `presentation` - Tier-to-style tables and the zig-zag workflow layout
//! - `aggregator` - Result lists into a `SessionSummary`
//! - `models` - Canonical, renderer-ready records

pub mod aggregator;
pub mod batcher;
pub mod models;
pub mod normalizer;
pub mod presentation;

// Re-export core model types
pub use models::{
    CanonicalResult, NormalizedResult, NormalizedSentiment, PresentationTier, RiskAssessment,
    RiskTier, SessionSummary, SeverityTier, VideoRef, WorkflowStep,
};

// Re-export pipeline stages
pub use aggregator::aggregate;
pub use batcher::{batch, StatementBatch};
pub use normalizer::{normalize, normalize_all, normalize_sentiment, normalize_severity};
pub use presentation::{
    risk_badge, severity_badge, step_style, zigzag_layout, BadgeStyle, StepStyle, WorkflowLayout,
};
