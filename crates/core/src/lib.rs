//! Sentiment Insight Core
//!
//! Foundational types shared by every crate in the Sentiment Insight
//! workspace. This crate performs no I/O and pulls in no async runtime.
//!
//! ## Module Organization
//!
//! - `error` - Pipeline error taxonomy (`CoreError`, `CoreResult`)
//! - `wire` - Request/response types of the inference service contract
//! - `config` - Service connection settings and their validating builder
//!
//! ## Design Principles
//!
//! 1. **Untrusted input stays untrusted** - `wire` types accept anything the
//!    service might send; interpretation happens in the analysis crate
//! 2. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod config;
pub mod error;
pub mod wire;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Wire Types ─────────────────────────────────────────────────────────
pub use wire::{
    AnalysisRequest, BatchAnalysisResponse, RawAnalysisResult, RawVideo, RawWorkflowStep,
    MAX_BATCH_SIZE,
};

// ── Service Configuration ──────────────────────────────────────────────
pub use config::{ServiceConfig, ServiceConfigBuilder, DEFAULT_SERVICE_URL};
