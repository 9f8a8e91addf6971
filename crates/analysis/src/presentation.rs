//! Presentation Config
//!
//! Declarative styling for canonical results. Renderers look styles up here
//! instead of branching on tiers themselves; adding a tier means adding a
//! row to a table, not touching layout code.

use serde::Serialize;

use crate::models::{PresentationTier, RiskTier, SeverityTier, WorkflowStep};

// ============================================================================
// Workflow steps
// ============================================================================

/// Visual treatment of one workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepStyle {
    pub bold: bool,
    pub uppercase: bool,
    /// Stable class name for renderers with a stylesheet
    pub color_class: &'static str,
    pub border: &'static str,
    pub background: &'static str,
}

const ROUTINE_STEP: StepStyle = StepStyle {
    bold: false,
    uppercase: false,
    color_class: "step-routine",
    border: "#94a3b8",
    background: "#f8fafc",
};

static STEP_STYLES: [(PresentationTier, StepStyle); 3] = [
    (
        PresentationTier::Critical,
        StepStyle {
            bold: true,
            uppercase: true,
            color_class: "step-critical",
            border: "#fca5a5",
            background: "#fee2e2",
        },
    ),
    (
        PresentationTier::Supportive,
        StepStyle {
            bold: false,
            uppercase: false,
            color_class: "step-supportive",
            border: "#fcd34d",
            background: "#fef3c7",
        },
    ),
    (PresentationTier::Routine, ROUTINE_STEP),
];

/// Style for a step level. Levels without a row render as routine.
pub fn step_style(level: PresentationTier) -> &'static StepStyle {
    STEP_STYLES
        .iter()
        .find(|(tier, _)| *tier == level)
        .map(|(_, style)| style)
        .unwrap_or(&ROUTINE_STEP)
}

// ============================================================================
// Badges
// ============================================================================

/// Colors for a severity or risk badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub color_class: &'static str,
    pub foreground: &'static str,
    pub background: &'static str,
}

const SAFE_BADGE: BadgeStyle = BadgeStyle {
    color_class: "badge-normal",
    foreground: "#16a34a",
    background: "#dcfce7",
};

const CAUTION_BADGE: BadgeStyle = BadgeStyle {
    color_class: "badge-mild",
    foreground: "#facc15",
    background: "#fef3c7",
};

const ALERT_BADGE: BadgeStyle = BadgeStyle {
    color_class: "badge-high",
    foreground: "#dc2626",
    background: "#fee2e2",
};

static SEVERITY_BADGES: [(SeverityTier, BadgeStyle); 3] = [
    (SeverityTier::Low, SAFE_BADGE),
    (SeverityTier::Mild, CAUTION_BADGE),
    (SeverityTier::High, ALERT_BADGE),
];

static RISK_BADGES: [(RiskTier, BadgeStyle); 3] = [
    (RiskTier::Safe, SAFE_BADGE),
    (RiskTier::Uncertain, CAUTION_BADGE),
    (RiskTier::HighConcern, ALERT_BADGE),
];

pub fn severity_badge(tier: SeverityTier) -> &'static BadgeStyle {
    SEVERITY_BADGES
        .iter()
        .find(|(t, _)| *t == tier)
        .map(|(_, style)| style)
        .unwrap_or(&SAFE_BADGE)
}

pub fn risk_badge(tier: RiskTier) -> &'static BadgeStyle {
    RISK_BADGES
        .iter()
        .find(|(t, _)| *t == tier)
        .map(|(_, style)| style)
        .unwrap_or(&SAFE_BADGE)
}

// ============================================================================
// Zig-zag layout
// ============================================================================

/// Placement of workflow steps: two across the top, one centered, the
/// rest across the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowLayout<'a> {
    pub top: &'a [WorkflowStep],
    pub center: Option<&'a WorkflowStep>,
    pub bottom: &'a [WorkflowStep],
}

impl WorkflowLayout<'_> {
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }
}

pub fn zigzag_layout(steps: &[WorkflowStep]) -> WorkflowLayout<'_> {
    let (top, rest) = steps.split_at(steps.len().min(2));
    WorkflowLayout {
        top,
        center: rest.first(),
        bottom: rest.get(1..).unwrap_or(&[]),
    }
}
