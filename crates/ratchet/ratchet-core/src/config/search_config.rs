//! Text search configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GIT_BINARY, DEFAULT_REFERENCE, DEFAULT_SEARCH_PATH};

/// Where and against what the forbidden patterns are searched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Reference revision holding the violation baseline. Default: "develop".
    pub reference: Option<String>,
    /// Subdirectory the search is restricted to. Default: "scripts".
    pub path: Option<String>,
    /// Version-control binary to invoke. Default: "git".
    pub git_binary: Option<String>,
}

impl SearchConfig {
    /// Returns the effective reference revision, defaulting to "develop".
    pub fn effective_reference(&self) -> &str {
        self.reference.as_deref().unwrap_or(DEFAULT_REFERENCE)
    }

    /// Returns the effective search path, defaulting to "scripts".
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_SEARCH_PATH)
    }

    /// Returns the effective git binary, defaulting to "git".
    pub fn effective_git_binary(&self) -> &str {
        self.git_binary.as_deref().unwrap_or(DEFAULT_GIT_BINARY)
    }
}
