//! Rule set configuration.

use serde::{Deserialize, Serialize};

use crate::types::Rule;

/// Which rules a run enforces.
///
/// `definitions` replaces the built-in catalogue wholesale when non-empty.
/// `enabled` then narrows the active set down to the named rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Names of the rules to run. Empty means all of them.
    pub enabled: Vec<String>,
    /// Project-defined rules.
    pub definitions: Vec<Rule>,
}

impl RulesConfig {
    /// Returns the declared rules, or the built-in catalogue if none are declared.
    pub fn effective_definitions(&self) -> Vec<Rule> {
        if self.definitions.is_empty() {
            Rule::builtin()
        } else {
            self.definitions.clone()
        }
    }

    /// Returns the rules a run enforces, in declaration order.
    pub fn active_rules(&self) -> Vec<Rule> {
        let rules = self.effective_definitions();
        if self.enabled.is_empty() {
            return rules;
        }
        rules
            .into_iter()
            .filter(|rule| self.enabled.iter().any(|name| *name == rule.name))
            .collect()
    }
}
