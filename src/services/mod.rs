//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by commands.

pub mod locale;
pub mod render;
pub mod session;

pub use locale::{resolve_language, resolve_ui_text, user_message, Language, UiStringTable, LANGUAGES};
pub use render::render_session;
pub use session::{AnalysisOutcome, SessionController, SessionState};
