//! Text search backends.
//!
//! A backend answers "which lines match this pattern", either in the
//! working tree or at a revision, and says explicitly whether it failed.

pub mod git_grep;

pub use git_grep::GitGrep;

use ratchet_core::SearchError;

/// Result of one search invocation.
///
/// "No matches" is `Matches` with an empty vector, never an error.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Matched lines in file-then-line order, no deduplication.
    Matches(Vec<String>),
    /// The search itself failed.
    ToolError(SearchError),
}

impl SearchOutcome {
    pub fn into_result(self) -> Result<Vec<String>, SearchError> {
        match self {
            Self::Matches(lines) => Ok(lines),
            Self::ToolError(err) => Err(err),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::ToolError(_))
    }
}

/// A text search capability scoped to one part of a repository.
pub trait TextSearch {
    /// Human-readable description of the search scope, for logs and reports.
    fn scope(&self) -> String;

    /// Find every line matching `pattern`. `revision: None` searches the
    /// working tree.
    fn search(&self, pattern: &str, revision: Option<&str>) -> SearchOutcome;
}
