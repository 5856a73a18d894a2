//! `git grep` search backend.
//!
//! `git grep` exits with status 1 both when nothing matched and on some
//! failures, so the exit status alone is not enough: status 1 counts as
//! "no matches" only when the tool printed nothing on either stream.
//!
//! A pathspec after `--` that names nothing is also reported as "no
//! matches", so the search path is checked before every search.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::Instant;

use ratchet_core::SearchError;

use super::{SearchOutcome, TextSearch};

/// Searches one path prefix of a git repository with Perl-compatible
/// regular expressions.
#[derive(Debug, Clone)]
pub struct GitGrep {
    git_binary: String,
    repo_root: PathBuf,
    path: String,
}

impl GitGrep {
    pub fn new(git_binary: &str, repo_root: &Path, path: &str) -> Self {
        Self {
            git_binary: git_binary.to_string(),
            repo_root: repo_root.to_path_buf(),
            path: path.to_string(),
        }
    }

    /// Arguments passed to git for one search.
    ///
    /// The pattern goes through `-e` so a leading `-` is never read as an
    /// option, and `--` separates revisions from the path scope.
    pub fn build_args(&self, pattern: &str, revision: Option<&str>) -> Vec<String> {
        let mut args = vec![
            "--no-pager".to_string(),
            "grep".to_string(),
            "--no-color".to_string(),
            "-P".to_string(),
            "-e".to_string(),
            pattern.to_string(),
        ];
        if let Some(rev) = revision {
            args.push(rev.to_string());
        }
        args.push("--".to_string());
        args.push(self.path.clone());
        args
    }

    /// Fail unless the search path exists where it is about to be searched:
    /// on disk for the working tree, as a tree entry for a revision.
    pub fn check_scope(&self, revision: Option<&str>) -> Result<(), SearchError> {
        let Some(rev) = revision else {
            if self.repo_root.join(&self.path).exists() {
                return Ok(());
            }
            return Err(SearchError::ToolFailed {
                command: format!("stat {}", self.path),
                status: "missing search path".to_string(),
                message: format!(
                    "search path '{}' does not exist in the working tree at {}",
                    self.path,
                    self.repo_root.display()
                ),
            });
        };

        let path = self.path.trim_end_matches('/');
        let object = if path.is_empty() || path == "." {
            format!("{rev}^{{tree}}")
        } else {
            format!("{rev}:{path}")
        };
        let args = vec![
            "--no-pager".to_string(),
            "cat-file".to_string(),
            "-e".to_string(),
            object,
        ];
        let command = self.command_line(&args);
        let output = self.run_git(&args)?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
        let mut message = format!("search path '{}' not found at revision '{rev}'", self.path);
        if !stderr.is_empty() {
            message.push_str(": ");
            message.push_str(&stderr);
        }
        Err(SearchError::ToolFailed {
            command,
            status: exit_status_text(output.status.code()),
            message,
        })
    }

    fn run_git(&self, args: &[String]) -> Result<Output, SearchError> {
        Command::new(&self.git_binary)
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(|source| SearchError::Spawn {
                program: self.git_binary.clone(),
                source,
            })
    }

    fn command_line(&self, args: &[String]) -> String {
        let mut line = self.git_binary.clone();
        for arg in args {
            line.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                line.push_str(&format!("'{arg}'"));
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

impl TextSearch for GitGrep {
    fn scope(&self) -> String {
        format!("{}/{}", self.repo_root.display(), self.path)
    }

    fn search(&self, pattern: &str, revision: Option<&str>) -> SearchOutcome {
        let args = self.build_args(pattern, revision);
        let command = self.command_line(&args);
        let start = Instant::now();

        if let Err(err) = self.check_scope(revision) {
            tracing::debug!(command = %command, error = %err, "search scope missing");
            return SearchOutcome::ToolError(err);
        }
        let output = match self.run_git(&args) {
            Ok(output) => output,
            Err(err) => return SearchOutcome::ToolError(err),
        };

        let outcome = classify(&command, output.status.code(), &output.stdout, &output.stderr);
        match &outcome {
            SearchOutcome::Matches(lines) => tracing::debug!(
                command = %command,
                revision = revision.unwrap_or("<working tree>"),
                matches = lines.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "search finished"
            ),
            SearchOutcome::ToolError(err) => tracing::debug!(
                command = %command,
                error = %err,
                "search failed"
            ),
        }
        outcome
    }
}

/// Classify a finished `git grep` by exit code and captured output.
///
/// - `0`: matches, one per stdout line.
/// - `1` with both streams empty: no matches.
/// - anything else, including termination by signal (`None`): tool error
///   carrying stderr verbatim.
pub fn classify(command: &str, code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> SearchOutcome {
    match code {
        Some(0) => SearchOutcome::Matches(split_lines(stdout)),
        Some(1) if stdout.is_empty() && stderr.is_empty() => SearchOutcome::Matches(Vec::new()),
        _ => {
            let status = exit_status_text(code);
            let stderr = String::from_utf8_lossy(stderr).trim_end().to_string();
            let message = if stderr.is_empty() {
                "no diagnostic output".to_string()
            } else {
                stderr
            };
            SearchOutcome::ToolError(SearchError::ToolFailed {
                command: command.to_string(),
                status,
                message,
            })
        }
    }
}

fn exit_status_text(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("exit status {c}"),
        None => "terminated by signal".to_string(),
    }
}

fn split_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
