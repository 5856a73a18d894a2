//! Single-rule evaluation against a reference revision.

use std::time::Instant;

use ratchet_core::{Rule, SearchError};

use super::types::{RuleReport, ScanResult, Verdict};
use crate::search::TextSearch;

/// Decide a rule from its two match counts.
///
/// Non-tolerant rules fail on any current match. Tolerant rules fail only
/// when the current count exceeds the reference count; equal is fine.
pub fn verdict(tolerant: bool, reference_count: usize, current_count: usize) -> Verdict {
    let violated = if tolerant {
        current_count > reference_count
    } else {
        current_count > 0
    };
    if violated {
        Verdict::Violated
    } else {
        Verdict::Ok
    }
}

/// Scan `reference`, then the working tree, and decide `rule`.
///
/// The reference scan runs for non-tolerant rules too, so an unreachable
/// reference revision fails the run regardless of rule kind.
pub fn evaluate(
    rule: &Rule,
    search: &dyn TextSearch,
    reference: &str,
) -> Result<RuleReport, SearchError> {
    let start = Instant::now();

    let reference_scan = ScanResult::new(
        Some(reference),
        search.search(&rule.pattern, Some(reference)).into_result()?,
    );
    let current_scan = ScanResult::new(None, search.search(&rule.pattern, None).into_result()?);

    let verdict = verdict(rule.tolerant, reference_scan.count(), current_scan.count());

    Ok(RuleReport {
        rule: rule.clone(),
        reference: reference_scan,
        current: current_scan,
        verdict,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}
