//! Input Batcher
//!
//! Turns raw textarea content into the statement list sent to the service.

use sentiment_insight_core::{AnalysisRequest, CoreError, CoreResult, MAX_BATCH_SIZE};

/// Ordered, trimmed, non-empty statements. Holds between 1 and
/// [`MAX_BATCH_SIZE`] entries; the only constructor is [`batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementBatch(Vec<String>);

impl StatementBatch {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A batch built by [`batch`] is never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Build the request for this batch: single mode for one statement,
    /// batch mode otherwise.
    pub fn into_request(self) -> AnalysisRequest {
        let mut statements = self.0;
        if statements.len() == 1 {
            AnalysisRequest::single(statements.remove(0))
        } else {
            AnalysisRequest::batch(statements)
        }
    }
}

/// Split `raw` into statements.
///
/// Each line is trimmed and blank lines are dropped; order is preserved and
/// nothing else is altered (duplicates stay).
///
/// # Errors
/// - `EmptyInput` when no statement remains
/// - `TooManyStatements` when more than [`MAX_BATCH_SIZE`] remain
pub fn batch(raw: &str) -> CoreResult<StatementBatch> {
    let statements: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if statements.is_empty() {
        return Err(CoreError::EmptyInput);
    }
    if statements.len() > MAX_BATCH_SIZE {
        return Err(CoreError::TooManyStatements {
            count: statements.len(),
            max: MAX_BATCH_SIZE,
        });
    }

    Ok(StatementBatch(statements))
}
