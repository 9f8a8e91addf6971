//! Terminal Renderer
//!
//! Plain-text report of a session. All styling decisions come from the
//! presentation tables in the analysis crate; this module only lays lines out.

use sentiment_insight_analysis::{
    risk_badge, severity_badge, step_style, zigzag_layout, CanonicalResult, NormalizedResult,
    RiskAssessment, SessionSummary, VideoRef, WorkflowStep,
};

use crate::services::locale::UiStringTable;
use crate::services::session::SessionState;

const RULE: &str = "────────────────────────────────────────";

/// Render the whole session: header, results or error, summary and disclaimer.
pub fn render_session(state: &SessionState) -> String {
    let text = state.ui_text();
    let mut lines = vec![text.title.to_string(), text.subtitle.to_string(), String::new()];

    match &state.error {
        Some(message) => lines.push(format!("✖ {}", message)),
        None => {
            lines.extend(render_results(&state.results, text));
            lines.push(String::new());
            lines.extend(render_summary(&state.summary(), text));
        }
    }

    lines.push(String::new());
    lines.push(text.disclaimer.to_string());
    lines.join("\n")
}

/// Each result in input order, followed by the first result's videos.
pub fn render_results(results: &[NormalizedResult], text: &UiStringTable) -> Vec<String> {
    if results.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![text.results_heading.to_string(), RULE.to_string()];
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        match result {
            NormalizedResult::Sentiment(r) => lines.extend(render_sentiment(i + 1, r, text)),
            NormalizedResult::Risk(r) => lines.extend(render_risk(i + 1, r, text)),
        }
    }

    // Videos are shown once, for the first statement only
    if let Some(first) = results.first().and_then(NormalizedResult::as_sentiment) {
        if !first.youtube_recommendations.is_empty() {
            lines.push(String::new());
            lines.extend(render_videos(&first.youtube_recommendations, text));
        }
    }

    lines
}

fn render_sentiment(index: usize, result: &CanonicalResult, text: &UiStringTable) -> Vec<String> {
    let sentiment = result
        .sentiment_label
        .clone()
        .unwrap_or_else(|| result.sentiment.to_string());
    let badge = severity_badge(result.severity);

    let mut lines = vec![
        format!("[{}] {}: {}", index, text.text_label, result.text),
        format!("    {}: {}", text.sentiment_label, sentiment),
        format!("    {}: {} ({})", text.severity_label, result.severity, badge.color_class),
        format!("    {}: {:.2}", text.confidence_label, result.confidence),
    ];

    let layout = zigzag_layout(&result.roadmap);
    if !layout.is_empty() {
        lines.push(format!("    {}", text.workflow_heading));
        lines.push(format!("      {}", row(layout.top)));
        if let Some(center) = layout.center {
            lines.push(format!("          {}", step_text(center)));
        }
        if !layout.bottom.is_empty() {
            lines.push(format!("      {}", row(layout.bottom)));
        }
    }

    lines
}

fn render_risk(index: usize, result: &RiskAssessment, text: &UiStringTable) -> Vec<String> {
    let badge = risk_badge(result.risk_tier);
    let mut lines = vec![
        format!("[{}] {}: {}", index, text.text_label, result.text),
        format!(
            "    {}: {} ({})",
            text.risk_level_label,
            result.risk_level.as_deref().unwrap_or("-"),
            badge.color_class
        ),
    ];
    if let Some(score) = result.risk_score {
        lines.push(format!("    {}: {:.2}", text.risk_score_label, score));
    }
    if let Some(recommendation) = &result.recommendation {
        lines.push(format!("    {}: {}", text.recommendation_label, recommendation));
    }
    lines
}

fn render_videos(videos: &[VideoRef], text: &UiStringTable) -> Vec<String> {
    let mut lines = vec![text.videos_heading.to_string(), text.videos_subheading.to_string()];
    for video in videos {
        let details: Vec<&str> = [video.channel.as_str(), video.views.as_str(), video.published.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if details.is_empty() {
            lines.push(format!("  • {}", video.title));
        } else {
            lines.push(format!("  • {} ({})", video.title, details.join(" · ")));
        }
        lines.push(format!("    {}", video.watch_url()));
    }
    lines
}

/// Session counts, tiers in label order.
pub fn render_summary(summary: &SessionSummary, text: &UiStringTable) -> Vec<String> {
    let mut lines = vec![
        text.summary_heading.to_string(),
        format!("  {}: {}", text.total_label, summary.total),
    ];
    lines.extend(
        summary
            .per_tier
            .iter()
            .map(|(tier, count)| format!("  {}: {}", tier, count)),
    );
    lines
}

fn row(steps: &[WorkflowStep]) -> String {
    steps.iter().map(step_text).collect::<Vec<_>>().join("   →   ")
}

fn step_text(step: &WorkflowStep) -> String {
    let style = step_style(step.level);
    let body = if style.uppercase {
        step.text.to_uppercase()
    } else {
        step.text.clone()
    };
    if style.bold {
        format!("‼ {}", body)
    } else {
        body
    }
}
