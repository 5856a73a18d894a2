//! Console reporter: human-readable output.

use super::Reporter;
use crate::gates::{RuleReport, RunOutcome};

/// Console reporter for terminal and CI log output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.use_color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn write_passed(&self, output: &mut String, report: &RuleReport) {
        let counts = if report.rule.tolerant {
            format!(
                "current: {}, reference: {}",
                report.current.count(),
                report.reference.count()
            )
        } else {
            "no matches".to_string()
        };
        output.push_str(&format!(
            "{} {} ({})\n",
            self.paint("✓", "32"),
            report.rule.name,
            counts
        ));
    }

    fn write_violated(&self, output: &mut String, report: &RuleReport) {
        output.push_str(&format!("{} {}\n", self.paint("✗", "31"), report.rule.name));
        for line in &report.current.lines {
            output.push_str(&format!("    {line}\n"));
        }
        output.push_str(&format!("  pattern: {}\n", report.rule.pattern));
        if report.rule.tolerant {
            output.push_str(&format!(
                "  current count: {}, reference count: {} (+{})\n",
                report.current.count(),
                report.reference.count(),
                report.increase()
            ));
        }
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, outcome: &RunOutcome) -> Result<String, String> {
        let mut output = String::new();

        output.push_str(&format!(
            "Ratchet pattern report (reference: {}, scope: {})\n\n",
            outcome.reference, outcome.scope
        ));

        for report in &outcome.results {
            if report.violated() {
                self.write_violated(&mut output, report);
            } else {
                self.write_passed(&mut output, report);
            }
        }

        output.push_str(&format!(
            "\n─── Summary: {}/{} rules passed ───\n",
            outcome.passed_count(),
            outcome.results.len()
        ));
        if outcome.any_violated() {
            output.push_str(&format!("Result: {}\n", self.paint("FAILED ✗", "31")));
        } else {
            output.push_str(&format!("Result: {}\n", self.paint("PASSED ✓", "32")));
        }

        Ok(output)
    }
}
