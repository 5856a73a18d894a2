//! Text search errors.

use super::error_code::{self, RatchetErrorCode};

/// A search invocation failed for a reason other than "no matches".
///
/// Always fatal: the run aborts and the tool's own diagnostic is surfaced
/// unchanged in `message`.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("`{command}` failed ({status}): {message}")]
    ToolFailed {
        command: String,
        status: String,
        message: String,
    },
}

impl RatchetErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Spawn { .. } => error_code::TOOL_NOT_FOUND,
            Self::ToolFailed { .. } => error_code::SEARCH_ERROR,
        }
    }
}
