//! Pull-request event payload reading.
//!
//! The CI host writes the triggering event as JSON and exposes its location
//! through `GITHUB_EVENT_PATH`. Only `pull_request.title` is required;
//! `pull_request.number` is kept for log context and everything else is
//! ignored.

use crate::error::{Result, TitleGateError};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Environment variable naming the event payload file.
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";

/// Pull-request event payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestEvent {
    /// The pull request object, absent for non-PR events.
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

/// Fields of the pull request this tool consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequest {
    /// PR title.
    #[serde(default)]
    pub title: Option<String>,

    /// PR number. Kept loose: it only feeds log context, so an odd shape
    /// must not fail the parse.
    #[serde(default)]
    pub number: Option<serde_json::Value>,
}

impl PullRequestEvent {
    /// Load and parse the event payload at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TitleGateError::EventRead {
            path: path.to_path_buf(),
            source,
        })?;
        let event = Self::parse(&content).map_err(|source| TitleGateError::EventParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), number = ?event.number(), "Loaded pull request event");
        Ok(event)
    }

    /// Parse an event payload from a JSON string.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The PR title, or `None` when absent or empty.
    pub fn title(&self) -> Option<&str> {
        self.pull_request
            .as_ref()
            .and_then(|pr| pr.title.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// The PR number, when present.
    pub fn number(&self) -> Option<u64> {
        self.pull_request
            .as_ref()
            .and_then(|pr| pr.number.as_ref())
            .and_then(serde_json::Value::as_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_title_extracted() {
        let event =
            PullRequestEvent::parse(r#"{"pull_request": {"title": "ARCHTECH-1 Formats", "number": 7}}"#)
                .unwrap();
        assert_eq!(event.title(), Some("ARCHTECH-1 Formats"));
        assert_eq!(event.number(), Some(7));
    }

    #[test]
    fn test_unrelated_fields_ignored() {
        let event = PullRequestEvent::parse(
            r#"{"action": "opened", "repository": {"full_name": "o/r"},
                "pull_request": {"title": "DEV to UAT", "user": {"login": "x"}}}"#,
        )
        .unwrap();
        assert_eq!(event.title(), Some("DEV to UAT"));
        assert_eq!(event.number(), None);
    }

    #[test]
    fn test_non_integer_number_is_ignored() {
        let event = PullRequestEvent::parse(
            r#"{"pull_request": {"title": "ARCHTECH-1 Formats", "number": "seven"}}"#,
        )
        .unwrap();
        assert_eq!(event.title(), Some("ARCHTECH-1 Formats"));
        assert_eq!(event.number(), None);
    }

    #[test]
    fn test_missing_pull_request_has_no_title() {
        let event = PullRequestEvent::parse(r#"{"action": "push"}"#).unwrap();
        assert_eq!(event.title(), None);
    }

    #[test]
    fn test_empty_and_null_title_are_absent() {
        let empty = PullRequestEvent::parse(r#"{"pull_request": {"title": ""}}"#).unwrap();
        assert_eq!(empty.title(), None);

        let null = PullRequestEvent::parse(r#"{"pull_request": {"title": null}}"#).unwrap();
        assert_eq!(null.title(), None);
    }

    #[test]
    fn test_non_object_payload_fails_to_parse() {
        assert!(PullRequestEvent::parse("[1, 2, 3]").is_err());
        assert!(PullRequestEvent::parse("not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pull_request": {{"title": "ARCHTECH-42 fix login bug"}}}}"#).unwrap();

        let event = PullRequestEvent::load(file.path()).unwrap();
        assert_eq!(event.title(), Some("ARCHTECH-42 fix login bug"));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PullRequestEvent::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TitleGateError::EventRead { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = PullRequestEvent::load(file.path()).unwrap_err();
        assert!(matches!(err, TitleGateError::EventParse { .. }));
    }
}
