//! Jira issue lookup.
//!
//! One authenticated GET per check, no retries. The response body is never
//! read: only the status code decides the result.

use crate::config::TrackerConfig;
use crate::error::{Result, TitleGateError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, info, warn};

/// Result of looking an issue up in the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueStatus {
    /// Tracker answered 200.
    Valid,
    /// Tracker answered with any other status.
    Invalid { status: u16 },
    /// Tracker could not be reached.
    LookupError { reason: String },
}

/// Issue existence lookup.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Look up `issue_key`. Never fails: transport errors become
    /// [`IssueStatus::LookupError`].
    async fn lookup(&self, issue_key: &str) -> IssueStatus;

    /// Settings problem that makes every lookup pointless. Checked right
    /// before a lookup would happen.
    fn configuration_error(&self) -> Option<&TitleGateError> {
        None
    }
}

/// Jira REST client
pub struct JiraClient {
    config: TrackerConfig,
    config_error: Option<TitleGateError>,
    http_client: reqwest::Client,
}

impl JiraClient {
    /// Create a new Jira client.
    ///
    /// Settings are validated here, once. An invalid configuration does not
    /// fail construction: titles that never reach a lookup still get their
    /// own verdict.
    pub fn new(config: TrackerConfig) -> Result<Self> {
        let config_error = config.validate().err();
        if let Some(e) = &config_error {
            warn!(error = %e, "Jira is not configured");
        }

        let mut builder =
            reqwest::Client::builder().user_agent(concat!("titlegate/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(JiraClient {
            config,
            config_error,
            http_client,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    fn configuration_error(&self) -> Option<&TitleGateError> {
        self.config_error.as_ref()
    }

    async fn lookup(&self, issue_key: &str) -> IssueStatus {
        let url = self.config.issue_url(issue_key);
        debug!(%url, "Looking up Jira issue");

        // Raw token header plus request-level basic auth: some Jira setups
        // accept only one of the two.
        let request = self
            .http_client
            .get(&url)
            .basic_auth(&self.config.user_email, Some(&self.config.api_token))
            .header(AUTHORIZATION, format!("Basic {}", self.config.api_token))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                if status == 200 {
                    info!(issue_key, "Jira issue found");
                    IssueStatus::Valid
                } else {
                    warn!(issue_key, status, "Jira issue check failed");
                    IssueStatus::Invalid { status }
                }
            }
            Err(e) => {
                let reason = error_chain(&e);
                warn!(issue_key, error = %reason, "Could not reach Jira");
                IssueStatus::LookupError { reason }
            }
        }
    }
}

/// Render an error with its sources, `outer: inner: root`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_keeps_config() {
        let config = TrackerConfig::new("https://acme.atlassian.net", "dev@acme.io", "t")
            .with_timeout(Duration::from_secs(5));
        let client = JiraClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
        assert!(client.configuration_error().is_none());
    }

    #[test]
    fn test_placeholder_config_still_builds_client() {
        let client = JiraClient::new(TrackerConfig::default()).unwrap();
        assert!(matches!(
            client.configuration_error(),
            Some(TitleGateError::PlaceholderCredential { .. })
        ));
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let outer = crate::error::TitleGateError::EventRead {
            path: "event.json".into(),
            source: inner,
        };
        let rendered = error_chain(&outer);
        assert!(rendered.starts_with("failed to read event file event.json"));
        assert!(rendered.ends_with(": refused"));
    }
}
