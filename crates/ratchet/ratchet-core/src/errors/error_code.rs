//! RatchetErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable error code string
/// that log lines and machine-readable reports can key on.
pub trait RatchetErrorCode {
    /// Returns the error code string (e.g., "SEARCH_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SEARCH_ERROR: &str = "SEARCH_ERROR";
pub const TOOL_NOT_FOUND: &str = "TOOL_NOT_FOUND";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
