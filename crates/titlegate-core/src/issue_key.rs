//! Jira issue key extraction.
//!
//! Independent of which title convention matched: a title accepted through
//! the change/incident ticket conventions usually carries no issue key.

use crate::error::{Result, TitleGateError};
use regex::Regex;

/// Issue key shape: eight letters, a hyphen, one or more digits.
pub const ISSUE_KEY_PATTERN: &str = r"[A-Za-z]{8}-\d+";

/// Extracts the first issue key from a PR title.
#[derive(Debug, Clone)]
pub struct IssueKeyExtractor {
    re: Regex,
}

impl IssueKeyExtractor {
    /// Compile the issue key pattern.
    pub fn new() -> Result<Self> {
        let re = Regex::new(ISSUE_KEY_PATTERN).map_err(|source| TitleGateError::InvalidPattern {
            name: "issue-key".to_string(),
            source,
        })?;
        Ok(Self { re })
    }

    /// First issue key in `title`, if any.
    pub fn extract<'t>(&self, title: &'t str) -> Option<&'t str> {
        self.re.find(title).map(|m| m.as_str())
    }
}
