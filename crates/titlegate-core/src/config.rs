//! Jira tracker configuration.
//!
//! Built once at process start and handed to [`crate::JiraClient`]. The
//! environment defaults are placeholders; [`TrackerConfig::validate`] rejects
//! them so a misconfigured pipeline fails before any lookup is attempted.

use crate::error::{Result, TitleGateError};
use std::fmt;
use std::time::Duration;

pub const BASE_URL_VAR: &str = "JIRA_BASE_URL";
pub const API_TOKEN_VAR: &str = "JIRA_API_TOKEN";
pub const USER_EMAIL_VAR: &str = "JIRA_USER_EMAIL";
pub const API_VERSION_VAR: &str = "JIRA_API_VERSION";
pub const TIMEOUT_VAR: &str = "JIRA_TIMEOUT_SECS";

pub const PLACEHOLDER_BASE_URL: &str = "https://XXXXXXX.atlassian.net";
pub const PLACEHOLDER_API_TOKEN: &str = "XXXXXXXXXXXXXX";
pub const PLACEHOLDER_USER_EMAIL: &str = "XXXXXXX@gmail.com";

/// Jira REST API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2";

/// Jira connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Jira site URL, e.g. `https://acme.atlassian.net`
    pub base_url: String,
    /// API token
    pub api_token: String,
    /// Account email paired with the token for basic auth
    pub user_email: String,
    /// REST API version segment
    pub api_version: String,
    /// Request timeout; `None` leaves the HTTP client default (no timeout)
    pub timeout: Option<Duration>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            base_url: PLACEHOLDER_BASE_URL.to_string(),
            api_token: PLACEHOLDER_API_TOKEN.to_string(),
            user_email: PLACEHOLDER_USER_EMAIL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

impl TrackerConfig {
    /// Create config for a specific Jira site
    pub fn new(base_url: &str, user_email: &str, api_token: &str) -> Self {
        TrackerConfig {
            base_url: base_url.to_string(),
            api_token: api_token.to_string(),
            user_email: user_email.to_string(),
            ..Self::default()
        }
    }

    /// Set the REST API version
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reject empty settings and untouched placeholders.
    pub fn validate(&self) -> Result<()> {
        let settings = [
            (BASE_URL_VAR, self.base_url.as_str(), PLACEHOLDER_BASE_URL),
            (API_TOKEN_VAR, self.api_token.as_str(), PLACEHOLDER_API_TOKEN),
            (USER_EMAIL_VAR, self.user_email.as_str(), PLACEHOLDER_USER_EMAIL),
        ];

        for (var, value, placeholder) in settings {
            if value.trim().is_empty() {
                return Err(TitleGateError::MissingCredential { var });
            }
            if value == placeholder {
                return Err(TitleGateError::PlaceholderCredential { var });
            }
        }

        if self.api_version.trim().is_empty() {
            return Err(TitleGateError::MissingCredential {
                var: API_VERSION_VAR,
            });
        }

        Ok(())
    }

    /// Issue lookup URL for `issue_key`.
    pub fn issue_url(&self, issue_key: &str) -> String {
        format!(
            "{}/rest/api/{}/issue/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            issue_key
        )
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("user_email", &self.user_email)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> TrackerConfig {
        TrackerConfig::new("https://acme.atlassian.net", "dev@acme.io", "token-123")
    }

    #[test]
    fn test_default_is_placeholder() {
        let config = TrackerConfig::default();
        assert_eq!(config.base_url, PLACEHOLDER_BASE_URL);
        assert_eq!(config.api_version, "2");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_default_fails_validation() {
        let err = TrackerConfig::default().validate().unwrap_err();
        assert!(matches!(
            err,
            TitleGateError::PlaceholderCredential { var: BASE_URL_VAR }
        ));
    }

    #[test]
    fn test_placeholder_token_fails_validation() {
        let mut config = configured();
        config.api_token = PLACEHOLDER_API_TOKEN.to_string();
        assert!(matches!(
            config.validate().unwrap_err(),
            TitleGateError::PlaceholderCredential { var: API_TOKEN_VAR }
        ));
    }

    #[test]
    fn test_empty_email_fails_validation() {
        let mut config = configured();
        config.user_email = "  ".to_string();
        assert!(matches!(
            config.validate().unwrap_err(),
            TitleGateError::MissingCredential { var: USER_EMAIL_VAR }
        ));
    }

    #[test]
    fn test_configured_passes_validation() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn test_issue_url() {
        assert_eq!(
            configured().issue_url("ARCHTECH-42"),
            "https://acme.atlassian.net/rest/api/2/issue/ARCHTECH-42"
        );
    }

    #[test]
    fn test_issue_url_trims_trailing_slash_and_uses_version() {
        let config = TrackerConfig::new("https://acme.atlassian.net/", "dev@acme.io", "t")
            .with_api_version("3");
        assert_eq!(
            config.issue_url("ARCHTECH-1"),
            "https://acme.atlassian.net/rest/api/3/issue/ARCHTECH-1"
        );
    }

    #[test]
    fn test_with_timeout() {
        let config = configured().with_timeout(Duration::from_secs(15));
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", configured());
        assert!(!rendered.contains("token-123"));
        assert!(rendered.contains("<redacted>"));
    }
}
