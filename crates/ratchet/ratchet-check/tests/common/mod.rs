//! Shared test helpers: an in-memory search backend.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use ratchet_check::search::{SearchOutcome, TextSearch};
use ratchet_core::SearchError;

type Key = (String, Option<String>);

/// Search backend with canned answers keyed by (pattern, revision).
/// Unknown keys answer with no matches. Every call is recorded.
#[derive(Default)]
pub struct FakeSearch {
    answers: HashMap<Key, Result<Vec<String>, String>>,
    pub calls: RefCell<Vec<Key>>,
}

impl FakeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `count` synthetic matching lines.
    pub fn matches(self, pattern: &str, revision: Option<&str>, count: usize) -> Self {
        let lines = (1..=count)
            .map(|i| format!("scripts/file{i}.js:{i}:match {i}"))
            .collect();
        self.lines(pattern, revision, lines)
    }

    pub fn lines(mut self, pattern: &str, revision: Option<&str>, lines: Vec<String>) -> Self {
        self.answers.insert(key(pattern, revision), Ok(lines));
        self
    }

    pub fn fails(mut self, pattern: &str, revision: Option<&str>, message: &str) -> Self {
        self.answers
            .insert(key(pattern, revision), Err(message.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl TextSearch for FakeSearch {
    fn scope(&self) -> String {
        "fake/scripts".to_string()
    }

    fn search(&self, pattern: &str, revision: Option<&str>) -> SearchOutcome {
        let key = key(pattern, revision);
        self.calls.borrow_mut().push(key.clone());
        match self.answers.get(&key) {
            Some(Ok(lines)) => SearchOutcome::Matches(lines.clone()),
            Some(Err(message)) => SearchOutcome::ToolError(SearchError::ToolFailed {
                command: format!("fake grep {pattern}"),
                status: "exit status 128".to_string(),
                message: message.clone(),
            }),
            None => SearchOutcome::Matches(Vec::new()),
        }
    }
}

fn key(pattern: &str, revision: Option<&str>) -> Key {
    (pattern.to_string(), revision.map(str::to_string))
}

pub const TRANSLATE: &str = r"\|\s*translate";
pub const TEMPLATE_URL: &str = r#"templateUrl\s*:\s*['"`].+?\.html['"`]"#;
