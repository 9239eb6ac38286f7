//! Error types for titlegate

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a title check before a verdict is reached
#[derive(Error, Debug)]
pub enum TitleGateError {
    /// Event payload could not be read
    #[error("failed to read event file {path}: {source}")]
    EventRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Event payload is not valid JSON for a pull-request event
    #[error("failed to parse event file {path}: {source}")]
    EventParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A title or issue-key pattern failed to compile
    #[error("invalid pattern '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// A tracker setting is empty
    #[error("{var} is empty")]
    MissingCredential { var: &'static str },

    /// A tracker setting still holds its placeholder default
    #[error("{var} still holds the placeholder value")]
    PlaceholderCredential { var: &'static str },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for titlegate operations.
pub type Result<T> = std::result::Result<T, TitleGateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_error_names_variable() {
        let err = TitleGateError::PlaceholderCredential {
            var: "JIRA_API_TOKEN",
        };
        assert_eq!(
            err.to_string(),
            "JIRA_API_TOKEN still holds the placeholder value"
        );
    }

    #[test]
    fn test_event_read_error_names_path() {
        let err = TitleGateError::EventRead {
            path: PathBuf::from("/tmp/event.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/tmp/event.json"));
    }
}
