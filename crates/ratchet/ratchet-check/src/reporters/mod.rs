//! Reporters: output formats for run outcomes.

pub mod console;
pub mod json;

use ratchet_core::config::ReportConfig;

use crate::gates::RunOutcome;

/// Trait for report generation.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn generate(&self, outcome: &RunOutcome) -> Result<String, String>;
}

/// Create the reporter selected by a validated report config.
///
/// `RatchetConfig::validate` rejects formats outside `REPORT_FORMATS`, so
/// anything that is not "json" renders to the console.
pub fn create_reporter(config: &ReportConfig) -> Box<dyn Reporter> {
    match config.effective_format() {
        "json" => Box::new(json::JsonReporter),
        _ => Box::new(console::ConsoleReporter::new(config.effective_color())),
    }
}
