//! Error handling for Ratchet.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod run_error;
pub mod search_error;

pub use config_error::ConfigError;
pub use error_code::RatchetErrorCode;
pub use run_error::RunError;
pub use search_error::SearchError;
