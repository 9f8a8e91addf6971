//! Locale Resolver
//!
//! Supported languages and the user-visible string tables.
//!
//! Unknown codes and `"auto"` resolve to English; lookup never fails.

use serde::Serialize;

use sentiment_insight_core::CoreError;

/// Code used when no language has been chosen
pub const AUTO_LANGUAGE: &str = "auto";

/// Fallback language code
pub const DEFAULT_LANGUAGE: &str = "en";

/// A selectable language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

/// Languages offered for selection, `auto` first.
pub static LANGUAGES: &[Language] = &[
    Language { code: "auto", label: "Auto-detect" },
    Language { code: "en", label: "English" },
    Language { code: "hi", label: "Hindi" },
    Language { code: "bn", label: "Bengali" },
    Language { code: "mr", label: "Marathi" },
    Language { code: "gu", label: "Gujarati" },
    Language { code: "pa", label: "Punjabi" },
    Language { code: "ta", label: "Tamil" },
    Language { code: "te", label: "Telugu" },
    Language { code: "kn", label: "Kannada" },
    Language { code: "or", label: "Odia" },
    Language { code: "as", label: "Assamese" },
];

/// Whether `code` is `auto` or one of the supported language codes
pub fn is_supported_language(code: &str) -> bool {
    LANGUAGES.iter().any(|l| l.code == code)
}

/// Every user-visible string the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiStringTable {
    pub language: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_heading: &'static str,
    pub feeling: &'static str,
    pub placeholder: &'static str,
    pub analyze: &'static str,
    pub analyzing: &'static str,
    pub results_heading: &'static str,
    pub text_label: &'static str,
    pub sentiment_label: &'static str,
    pub severity_label: &'static str,
    pub confidence_label: &'static str,
    pub risk_level_label: &'static str,
    pub risk_score_label: &'static str,
    pub recommendation_label: &'static str,
    pub workflow_heading: &'static str,
    pub videos_heading: &'static str,
    pub videos_subheading: &'static str,
    pub summary_heading: &'static str,
    pub total_label: &'static str,
    pub disclaimer: &'static str,
    pub error_empty: &'static str,
    pub error_too_many: &'static str,
    pub error_transport: &'static str,
    pub error_malformed: &'static str,
    pub error_busy: &'static str,
    pub error_discarded: &'static str,
}

pub static EN: UiStringTable = UiStringTable {
    language: "en",
    title: "Sentiment Insight Analyzer",
    subtitle: "Multilingual sentiment analysis with structured, actionable guidance.",
    input_heading: "Input Statements",
    feeling: "How are you feeling today?",
    placeholder: "Enter one statement per line (max 20)",
    analyze: "Analyze",
    analyzing: "Analyzing…",
    results_heading: "Analysis Results",
    text_label: "Text",
    sentiment_label: "Sentiment",
    severity_label: "Severity",
    confidence_label: "Confidence",
    risk_level_label: "Risk level",
    risk_score_label: "Risk score",
    recommendation_label: "Recommendation",
    workflow_heading: "Recommended Workflow:",
    videos_heading: "Recommended Videos",
    videos_subheading: "Helpful resources for this emotional state",
    summary_heading: "Session Summary",
    total_label: "Total statements",
    disclaimer: "This system provides non-clinical, informational guidance only.",
    error_empty: "Please enter at least one statement.",
    error_too_many: "Maximum 20 statements allowed.",
    error_transport: "Unable to reach backend service.",
    error_malformed: "The analysis service returned an unexpected response.",
    error_busy: "An analysis is already in progress.",
    error_discarded: "The session was reset before the analysis finished.",
};

pub static HI: UiStringTable = UiStringTable {
    language: "hi",
    title: "भावना अंतर्दृष्टि विश्लेषक",
    subtitle: "संरचित, उपयोगी मार्गदर्शन के साथ बहुभाषी भावना विश्लेषण।",
    input_heading: "कथन दर्ज करें",
    feeling: "आज आप कैसा महसूस कर रहे हैं?",
    placeholder: "प्रति पंक्ति एक कथन लिखें (अधिकतम 20)",
    analyze: "विश्लेषण करें",
    analyzing: "विश्लेषण हो रहा है…",
    results_heading: "विश्लेषण परिणाम",
    text_label: "पाठ",
    sentiment_label: "भावना",
    severity_label: "गंभीरता",
    confidence_label: "विश्वास",
    risk_level_label: "जोखिम स्तर",
    risk_score_label: "जोखिम अंक",
    recommendation_label: "सुझाव",
    workflow_heading: "अनुशंसित कार्यप्रवाह:",
    videos_heading: "अनुशंसित वीडियो",
    videos_subheading: "इस भावनात्मक स्थिति के लिए उपयोगी संसाधन",
    summary_heading: "सत्र सारांश",
    total_label: "कुल कथन",
    disclaimer: "यह प्रणाली केवल गैर-नैदानिक, सूचनात्मक मार्गदर्शन प्रदान करती है।",
    error_empty: "कृपया कम से कम एक कथन दर्ज करें।",
    error_too_many: "अधिकतम 20 कथनों की अनुमति है।",
    error_transport: "बैकएंड सेवा से संपर्क नहीं हो सका।",
    error_malformed: "विश्लेषण सेवा ने अप्रत्याशित उत्तर दिया।",
    error_busy: "एक विश्लेषण पहले से चल रहा है।",
    error_discarded: "विश्लेषण पूरा होने से पहले सत्र रीसेट हो गया।",
};

static TABLES: &[&UiStringTable] = &[&EN, &HI];

/// Resolve the effective language code.
///
/// `auto` takes the detected code when it is supported, otherwise `en`.
/// Unsupported selections also fall back to `en`.
pub fn resolve_language(selected: &str, detected: Option<&str>) -> &'static str {
    let lookup = |code: &str| {
        LANGUAGES
            .iter()
            .find(|l| l.code != AUTO_LANGUAGE && l.code.eq_ignore_ascii_case(code.trim()))
            .map(|l| l.code)
    };

    if selected == AUTO_LANGUAGE {
        return detected.and_then(lookup).unwrap_or(DEFAULT_LANGUAGE);
    }
    lookup(selected).unwrap_or(DEFAULT_LANGUAGE)
}

/// String table for `selected`; falls back to English.
pub fn resolve_ui_text(selected: &str) -> &'static UiStringTable {
    let code = resolve_language(selected, None);
    TABLES
        .iter()
        .copied()
        .find(|t| t.language == code)
        .unwrap_or(&EN)
}

/// The single localized message shown for a failed action.
pub fn user_message(err: &CoreError, text: &UiStringTable) -> &'static str {
    match err {
        CoreError::EmptyInput => text.error_empty,
        CoreError::TooManyStatements { .. } => text.error_too_many,
        CoreError::AnalysisInFlight => text.error_busy,
        CoreError::Transport(_) | CoreError::Config(_) => text.error_transport,
        CoreError::MalformedResult(_) | CoreError::Serialization(_) => text.error_malformed,
    }
}
