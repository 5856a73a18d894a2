//! Top-level Ratchet configuration with layered resolution.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ReportConfig, RulesConfig, SearchConfig};
use crate::constants::{PROJECT_CONFIG_FILE, REPORT_FORMATS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RATCHET_*`)
/// 2. Project config (`ratchet.toml` in the repository root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RatchetConfig {
    pub search: SearchConfig,
    pub report: ReportConfig,
    pub rules: RulesConfig,
}

impl RatchetConfig {
    /// Load configuration for the repository rooted at `root`.
    ///
    /// A missing `ratchet.toml` is not an error; compiled defaults apply.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            ::tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RatchetConfig) -> Result<(), ConfigError> {
        let reference = config.search.effective_reference();
        if reference.trim().is_empty() {
            return Err(invalid("search.reference", "must not be empty"));
        }
        if reference.starts_with('-') {
            return Err(invalid("search.reference", "must not start with '-'"));
        }
        if config.search.effective_path().trim().is_empty() {
            return Err(invalid("search.path", "must not be empty"));
        }
        if config.search.effective_git_binary().trim().is_empty() {
            return Err(invalid("search.git_binary", "must not be empty"));
        }

        let format = config.report.effective_format();
        if !REPORT_FORMATS.contains(&format) {
            return Err(invalid(
                "report.format",
                &format!("unknown format '{format}', expected one of {REPORT_FORMATS:?}"),
            ));
        }

        let definitions = config.rules.effective_definitions();
        let mut names = HashSet::new();
        for (i, rule) in definitions.iter().enumerate() {
            if rule.name.trim().is_empty() {
                return Err(invalid(
                    &format!("rules.definitions[{i}].name"),
                    "must not be empty",
                ));
            }
            if rule.pattern.is_empty() {
                return Err(invalid(
                    &format!("rules.definitions[{i}].pattern"),
                    "must not be empty",
                ));
            }
            if !names.insert(rule.name.as_str()) {
                return Err(invalid(
                    &format!("rules.definitions[{i}].name"),
                    &format!("duplicate rule name '{}'", rule.name),
                ));
            }
        }
        for name in &config.rules.enabled {
            if !names.contains(name.as_str()) {
                return Err(invalid(
                    "rules.enabled",
                    &format!("unknown rule '{name}'"),
                ));
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut RatchetConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: RatchetConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut RatchetConfig, other: &RatchetConfig) {
        // Search
        if other.search.reference.is_some() {
            base.search.reference = other.search.reference.clone();
        }
        if other.search.path.is_some() {
            base.search.path = other.search.path.clone();
        }
        if other.search.git_binary.is_some() {
            base.search.git_binary = other.search.git_binary.clone();
        }

        // Report
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.color.is_some() {
            base.report.color = other.report.color;
        }

        // Rules
        if !other.rules.enabled.is_empty() {
            base.rules.enabled = other.rules.enabled.clone();
        }
        if !other.rules.definitions.is_empty() {
            base.rules.definitions = other.rules.definitions.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RATCHET_REFERENCE`, `RATCHET_SEARCH_PATH`, etc.
    fn apply_env_overrides(config: &mut RatchetConfig) {
        if let Ok(val) = std::env::var("RATCHET_REFERENCE") {
            config.search.reference = Some(val);
        }
        if let Ok(val) = std::env::var("RATCHET_SEARCH_PATH") {
            config.search.path = Some(val);
        }
        if let Ok(val) = std::env::var("RATCHET_GIT_BINARY") {
            config.search.git_binary = Some(val);
        }
        if let Ok(val) = std::env::var("RATCHET_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("RATCHET_REPORT_COLOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.color = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RATCHET_ENABLED_RULES") {
            config.rules.enabled = val
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
