//! Shared constants for the Ratchet pattern gate.

/// Ratchet version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the repository root.
pub const PROJECT_CONFIG_FILE: &str = "ratchet.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "RATCHET_LOG";

/// Default tracing filter when `RATCHET_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "ratchet_core=info,ratchet_check=info,ratchet=info";

/// Default reference revision that pre-existing violations are counted in.
pub const DEFAULT_REFERENCE: &str = "develop";

/// Default subdirectory the text search is restricted to.
pub const DEFAULT_SEARCH_PATH: &str = "scripts";

/// Default version-control binary.
pub const DEFAULT_GIT_BINARY: &str = "git";

/// Default report format.
pub const DEFAULT_REPORT_FORMAT: &str = "console";

/// Report formats understood by the reporters.
pub const REPORT_FORMATS: &[&str] = &["console", "json"];

// ---- Exit statuses ----

/// Every rule passed.
pub const EXIT_PASSED: u8 = 0;

/// At least one rule was violated.
pub const EXIT_VIOLATED: u8 = 1;

/// Configuration or tooling failure; no verdict was reached.
pub const EXIT_TOOL_FAILURE: u8 = 2;
