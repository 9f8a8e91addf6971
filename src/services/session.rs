//! Analysis Session
//!
//! One user session: the current input, selected language and the last
//! result set. `SessionState` is an immutable value; every action produces a
//! new one which replaces the old under a single lock.
//!
//! The `epoch` counter advances on every language change or reset. An
//! in-flight analysis remembers the epoch it started in and its outcome is
//! discarded if the epoch has moved on by the time it returns.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::RwLock;

use sentiment_insight_analysis::{aggregate, batch, normalize_all, NormalizedResult, SessionSummary};
use sentiment_insight_core::{CoreError, CoreResult};
use sentiment_insight_inference::AnalysisService;

use crate::services::locale::{resolve_language, resolve_ui_text, user_message, UiStringTable};

// ============================================================================
// State
// ============================================================================

/// Snapshot of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Raw textarea content of the last submission
    pub input: String,
    /// Selected language code, possibly "auto"
    pub language: String,
    /// Results of the last successful analysis, in input order
    pub results: Arc<[NormalizedResult]>,
    pub loading: bool,
    /// Localized message of the last failure; replaces the results
    pub error: Option<String>,
    pub epoch: u64,
}

impl SessionState {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            language: language.into(),
            results: Arc::from(Vec::new()),
            loading: false,
            error: None,
            epoch: 0,
        }
    }

    /// Submission started: results and error cleared.
    pub fn begin(&self, input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            results: Arc::from(Vec::new()),
            loading: true,
            error: None,
            ..self.clone()
        }
    }

    /// Results replace the previous set wholesale.
    pub fn succeed(&self, results: Vec<NormalizedResult>) -> Self {
        Self {
            results: Arc::from(results),
            loading: false,
            error: None,
            ..self.clone()
        }
    }

    /// A single message replaces any results.
    pub fn fail(&self, message: impl Into<String>) -> Self {
        Self {
            results: Arc::from(Vec::new()),
            loading: false,
            error: Some(message.into()),
            ..self.clone()
        }
    }

    /// Switch language. Input, results, error and loading are all reset.
    pub fn with_language(&self, code: impl Into<String>) -> Self {
        Self {
            epoch: self.epoch + 1,
            ..Self::new(code)
        }
    }

    /// Clear everything except the language.
    pub fn reset(&self) -> Self {
        self.with_language(self.language.clone())
    }

    pub fn summary(&self) -> SessionSummary {
        aggregate(&self.results)
    }

    pub fn ui_text(&self) -> &'static UiStringTable {
        resolve_ui_text(&self.language)
    }

    /// Effective language: the selection, or the first result's detected
    /// language when the selection is "auto".
    pub fn effective_language(&self) -> &'static str {
        let detected = self
            .results
            .iter()
            .find_map(|r| r.as_sentiment().and_then(|c| c.language.as_deref()));
        resolve_language(&self.language, detected)
    }
}

// ============================================================================
// Controller
// ============================================================================

/// What happened to a submitted analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The session now shows these results
    Completed(SessionState),
    /// The session was reset or switched language while the call was in flight
    Discarded,
}

/// Clears the loading flag of an analysis whose future was dropped.
///
/// Armed once the session enters the loading state; the publishing path
/// disarms it while holding the write lock.
struct InFlightGuard {
    state: Arc<RwLock<SessionState>>,
    epoch: u64,
    armed: bool,
}

impl InFlightGuard {
    fn new(state: Arc<RwLock<SessionState>>, epoch: u64) -> Self {
        Self {
            state,
            epoch,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn abandon(state: &mut SessionState, epoch: u64) {
        if state.epoch != epoch || !state.loading {
            return;
        }
        tracing::warn!("Analysis in epoch {} was cancelled before completing", epoch);
        *state = state.fail(state.ui_text().error_transport);
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let epoch = self.epoch;
        if let Ok(mut state) = self.state.try_write() {
            Self::abandon(&mut state, epoch);
            return;
        }

        // Lock is busy; finish the cleanup on the runtime
        match Handle::try_current() {
            Ok(handle) => {
                let state = self.state.clone();
                handle.spawn(async move {
                    let mut state = state.write().await;
                    Self::abandon(&mut state, epoch);
                });
            }
            Err(_) => tracing::error!(
                "Analysis in epoch {} dropped outside a runtime; session left loading",
                epoch
            ),
        }
    }
}

/// Drives one session against an analysis backend.
pub struct SessionController {
    state: Arc<RwLock<SessionState>>,
    service: Arc<dyn AnalysisService>,
}

impl SessionController {
    pub fn new(service: Arc<dyn AnalysisService>, language: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::new(language))),
            service,
        }
    }

    /// Clone of the current state
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn change_language(&self, code: impl Into<String>) -> SessionState {
        let mut state = self.state.write().await;
        *state = state.with_language(code);
        tracing::debug!("Session language changed to {} (epoch {})", state.language, state.epoch);
        state.clone()
    }

    pub async fn reset(&self) -> SessionState {
        let mut state = self.state.write().await;
        *state = state.reset();
        state.clone()
    }

    /// Validate, submit and normalize `raw`, then publish the outcome.
    ///
    /// Validation errors are published without a network call. Any failure
    /// replaces the result set with one localized message; the underlying
    /// error is returned to the caller as well.
    ///
    /// If this future is dropped mid-flight (a caller timeout, say) the session
    /// leaves the loading state with the transport message, unless a reset or
    /// language change already moved it to a new epoch.
    pub async fn analyze(&self, raw: &str) -> CoreResult<AnalysisOutcome> {
        let (epoch, statements) = {
            let mut state = self.state.write().await;
            if state.loading {
                return Err(CoreError::AnalysisInFlight);
            }

            match batch(raw) {
                Ok(statements) => {
                    *state = state.begin(raw);
                    (state.epoch, statements)
                }
                Err(e) => {
                    let message = user_message(&e, state.ui_text());
                    *state = state.begin(raw).fail(message);
                    return Err(e);
                }
            }
        };

        let mut guard = InFlightGuard::new(self.state.clone(), epoch);

        let count = statements.len();
        let request = statements.into_request();
        tracing::debug!(
            "Submitting {} statement(s) to {} backend via {}",
            count,
            self.service.name(),
            request.path()
        );

        let outcome = match self.service.submit(&request).await {
            Ok(response) => normalize_all(response.into_results()),
            Err(e) => {
                tracing::warn!("Analysis request failed: {}", e);
                Err(CoreError::from(e))
            }
        };

        let mut state = self.state.write().await;
        guard.disarm();
        if state.epoch != epoch {
            tracing::warn!(
                "Discarding analysis result from epoch {} (session is at epoch {})",
                epoch,
                state.epoch
            );
            return Ok(AnalysisOutcome::Discarded);
        }

        match outcome {
            Ok(results) => {
                *state = state.succeed(results);
                let summary = state.summary();
                tracing::info!(
                    "Analysis completed: {} result(s), {:?}",
                    summary.total,
                    summary.per_tier
                );
                Ok(AnalysisOutcome::Completed(state.clone()))
            }
            Err(e) => {
                let message = user_message(&e, state.ui_text());
                *state = state.fail(message);
                Err(e)
            }
        }
    }
}
