//! JSON reporter: structured JSON output.

use serde_json::json;

use super::Reporter;
use crate::gates::RunOutcome;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, outcome: &RunOutcome) -> Result<String, String> {
        let rules: Vec<serde_json::Value> = outcome
            .results
            .iter()
            .map(|r| {
                json!({
                    "name": r.rule.name,
                    "pattern": r.rule.pattern,
                    "tolerant": r.rule.tolerant,
                    "verdict": r.verdict,
                    "current_count": r.current.count(),
                    "reference_count": r.reference.count(),
                    "increase": r.increase(),
                    "current_matches": r.current.lines,
                    "execution_time_ms": r.execution_time_ms,
                })
            })
            .collect();

        let output = json!({
            "overall_passed": !outcome.any_violated(),
            "reference": outcome.reference,
            "scope": outcome.scope,
            "rule_count": outcome.results.len(),
            "violated_count": outcome.violated().count(),
            "rules": rules,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
