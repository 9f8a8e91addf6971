//! Data Models
//!
//! Configuration and command-response structures for the application crate.

pub mod response;
pub mod settings;

pub use response::*;
pub use settings::*;
