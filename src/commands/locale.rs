//! Locale Commands

use crate::models::response::CommandResponse;
use crate::services::locale::{resolve_ui_text, Language, UiStringTable, LANGUAGES};

/// Resolved string table for a language code ("auto" and unknown codes give English)
pub fn get_ui_text(code: &str) -> CommandResponse<UiStringTable> {
    CommandResponse::ok(resolve_ui_text(code).clone())
}

/// All selectable languages, "auto" first
pub fn list_languages() -> CommandResponse<Vec<Language>> {
    CommandResponse::ok(LANGUAGES.to_vec())
}
