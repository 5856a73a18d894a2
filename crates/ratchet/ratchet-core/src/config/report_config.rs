//! Report output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REPORT_FORMAT;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: "console" | "json". Default: "console".
    pub format: Option<String>,
    /// ANSI colors in the console report. Default: false.
    pub color: Option<bool>,
}

impl ReportConfig {
    /// Returns the effective report format, defaulting to "console".
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_REPORT_FORMAT)
    }

    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(false)
    }
}
