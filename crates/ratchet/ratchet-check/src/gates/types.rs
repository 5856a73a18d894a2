//! Core types for rule evaluation.

use std::fmt;

use ratchet_core::constants::{EXIT_PASSED, EXIT_VIOLATED};
use ratchet_core::Rule;
use serde::{Deserialize, Serialize};

/// Per-rule decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Ok,
    Violated,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Violated => "violated",
        }
    }

    pub fn is_violated(&self) -> bool {
        matches!(self, Self::Violated)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lines matched by one search. The count is always `lines.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// `None` for the working tree.
    pub revision: Option<String>,
    pub lines: Vec<String>,
}

impl ScanResult {
    pub fn new(revision: Option<&str>, lines: Vec<String>) -> Self {
        Self {
            revision: revision.map(str::to_string),
            lines,
        }
    }

    pub fn count(&self) -> usize {
        self.lines.len()
    }
}

/// Everything known about one rule after evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleReport {
    pub rule: Rule,
    pub reference: ScanResult,
    pub current: ScanResult,
    pub verdict: Verdict,
    pub execution_time_ms: u64,
}

impl RuleReport {
    pub fn violated(&self) -> bool {
        self.verdict.is_violated()
    }

    /// Matches added on top of the reference baseline. Zero when the count
    /// went down.
    pub fn increase(&self) -> usize {
        self.current.count().saturating_sub(self.reference.count())
    }
}

/// Result of a complete run: every rule, in evaluation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOutcome {
    pub reference: String,
    pub scope: String,
    pub results: Vec<RuleReport>,
}

impl RunOutcome {
    pub fn any_violated(&self) -> bool {
        self.results.iter().any(RuleReport::violated)
    }

    pub fn violated(&self) -> impl Iterator<Item = &RuleReport> {
        self.results.iter().filter(|r| r.violated())
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.violated()).count()
    }

    /// Process exit status: 0 when every rule passed, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.any_violated() {
            EXIT_VIOLATED
        } else {
            EXIT_PASSED
        }
    }
}
