//! Commands
//!
//! Entry points called by the command line front end. Every command returns a
//! `CommandResponse` so results and failures serialize the same way.

pub mod analyze;
pub mod health;
pub mod locale;
pub mod settings;

pub use analyze::*;
pub use health::*;
pub use locale::*;
pub use settings::*;
