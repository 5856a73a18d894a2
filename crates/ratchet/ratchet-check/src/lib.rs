//! Regression-gated pattern checking.
//!
//! Subsystems:
//! - `search`: text search backends, `git grep` adapter
//! - `gates`: per-rule verdicts and the sequential run
//! - `reporters`: console and JSON output

pub mod gates;
pub mod reporters;
pub mod search;

use std::path::Path;

use ratchet_core::{RatchetConfig, RunError};

pub use gates::{RuleReport, RuleRunner, RunOutcome, ScanResult, Verdict};
pub use search::{GitGrep, SearchOutcome, TextSearch};

/// Run every active rule of `config` against the repository at `root`
/// using `git grep`.
pub fn check_repository(config: &RatchetConfig, root: &Path) -> Result<RunOutcome, RunError> {
    let search = GitGrep::new(
        config.search.effective_git_binary(),
        root,
        config.search.effective_path(),
    );
    let runner = RuleRunner::new(
        config.rules.active_rules(),
        config.search.effective_reference(),
    );
    Ok(runner.run(&search)?)
}
