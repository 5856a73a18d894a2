//! Rule definitions and the built-in rule catalogue.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A forbidden pattern and how strictly it is enforced.
///
/// A tolerant rule only fails when the working tree has more matches than
/// the reference revision. A non-tolerant rule fails on any match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Human-readable description, shown in reports.
    pub name: String,
    /// Perl-compatible regular expression handed to the search tool.
    pub pattern: String,
    /// Allow up to the reference revision's match count.
    #[serde(default)]
    pub tolerant: bool,
}

impl Rule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, tolerant: bool) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            tolerant,
        }
    }

    /// Rules enforced when the project config declares none.
    pub fn builtin() -> Vec<Rule> {
        vec![
            Rule::new(
                "Use gettext() instead of the translate filter in templates",
                r"\|\s*translate",
                true,
            ),
            Rule::new(
                "Import component templates instead of referencing them via templateUrl",
                r#"templateUrl\s*:\s*['"`].+?\.html['"`]"#,
                false,
            ),
        ]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (/{}/)", self.name, self.pattern)
    }
}
