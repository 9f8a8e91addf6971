//! Core Error Types
//!
//! The error taxonomy of the analysis pipeline. Every failure an Analyze
//! action can produce is one of these variants; all of them are recoverable
//! per action and none is fatal to the process.
//!
//! The inference crate has its own transport-level error type which folds
//! into `Transport` / `MalformedResult` here, and the application crate wraps
//! this type in `AppError`.

use thiserror::Error;

/// Core error type for the Sentiment Insight workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No non-blank statement in the submitted text
    #[error("No statements to analyze")]
    EmptyInput,

    /// More statements than a single batch may carry
    #[error("Too many statements: {count} (maximum {max})")]
    TooManyStatements { count: usize, max: usize },

    /// Network failure or non-success response from the inference service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service returned a payload that cannot be rendered
    #[error("Malformed result: {0}")]
    MalformedResult(String),

    /// An analysis is already running for this session
    #[error("An analysis is already in progress")]
    AnalysisInFlight,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a malformed result error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResult(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the user can fix this by editing the input text.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::TooManyStatements { .. })
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
