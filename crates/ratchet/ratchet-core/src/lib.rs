//! Core types, errors, configuration, tracing, and constants shared by the
//! Ratchet crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::RatchetConfig;
pub use errors::{ConfigError, RatchetErrorCode, RunError, SearchError};
pub use types::Rule;
