//! Session Aggregator

use crate::models::{NormalizedResult, SessionSummary};

/// Fold results into per-tier counts.
///
/// Sentiment results count under their severity, risk results under their
/// literal `risk_level`. Labels are never filtered, so an unexpected tier
/// still shows up in the summary.
pub fn aggregate(results: &[NormalizedResult]) -> SessionSummary {
    results
        .iter()
        .fold(SessionSummary::default(), |mut summary, result| {
            summary.total += 1;
            *summary
                .per_tier
                .entry(result.tier_label().to_string())
                .or_insert(0) += 1;
            summary
        })
}
