//! Sequential rule runner.

use ratchet_core::{Rule, SearchError};

use super::evaluator::evaluate;
use super::types::RunOutcome;
use crate::search::TextSearch;

/// Evaluates a fixed rule list against one reference revision.
///
/// Rules run one at a time in declaration order. A violation never stops
/// the run; a search error aborts it immediately.
#[derive(Debug, Clone)]
pub struct RuleRunner {
    rules: Vec<Rule>,
    reference: String,
}

impl RuleRunner {
    pub fn new(rules: Vec<Rule>, reference: &str) -> Self {
        Self {
            rules,
            reference: reference.to_string(),
        }
    }

    /// Evaluate every rule and collect the reports.
    pub fn run(&self, search: &dyn TextSearch) -> Result<RunOutcome, SearchError> {
        let scope = search.scope();
        tracing::info!(
            rules = self.rules.len(),
            reference = %self.reference,
            scope = %scope,
            "evaluating rules"
        );

        let mut results = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let report = match evaluate(rule, search, &self.reference) {
                Ok(report) => report,
                Err(err) => {
                    tracing::error!(rule = %rule, error = %err, "search failed, aborting run");
                    return Err(err);
                }
            };

            // Verdicts stay at debug: an aborted run must not surface any.
            if report.violated() {
                tracing::debug!(
                    rule = %rule.name,
                    tolerant = rule.tolerant,
                    current = report.current.count(),
                    reference = report.reference.count(),
                    "rule violated"
                );
            } else {
                tracing::debug!(
                    rule = %rule.name,
                    verdict = %report.verdict,
                    current = report.current.count(),
                    reference = report.reference.count(),
                    elapsed_ms = report.execution_time_ms,
                    "rule ok"
                );
            }
            results.push(report);
        }

        let outcome = RunOutcome {
            reference: self.reference.clone(),
            scope,
            results,
        };
        tracing::info!(
            passed = outcome.passed_count(),
            violated = outcome.results.len() - outcome.passed_count(),
            "run finished"
        );
        Ok(outcome)
    }
}
