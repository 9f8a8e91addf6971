//! Storage Layer
//!
//! Persistence of the JSON configuration file.

pub mod config;

pub use config::*;
