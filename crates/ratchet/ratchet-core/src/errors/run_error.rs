//! Fatal run errors.

use super::error_code::{self, RatchetErrorCode};
use super::{ConfigError, SearchError};

/// Errors that abort a run before a verdict is reached.
/// Aggregates subsystem errors via `From` conversions.
///
/// Rule violations are not errors; they are recorded in the run outcome.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Cannot determine repository root: {0}")]
    RepositoryRoot(#[source] std::io::Error),

    #[error("Report generation failed: {0}")]
    Report(String),
}

impl RatchetErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Search(e) => e.error_code(),
            Self::RepositoryRoot(_) => error_code::CONFIG_ERROR,
            Self::Report(_) => error_code::REPORT_ERROR,
        }
    }
}
