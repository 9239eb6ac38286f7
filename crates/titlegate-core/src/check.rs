//! Title check orchestration.
//!
//! Flow: event file → title → convention match → issue key → tracker lookup
//! → [`Outcome`]. Validation failures are outcomes; only I/O and parse
//! errors on the event file are returned as `Err`.

use crate::error::Result;
use crate::event::PullRequestEvent;
use crate::issue_key::IssueKeyExtractor;
use crate::outcome::Outcome;
use crate::title::TitleValidator;
use crate::tracker::{IssueStatus, IssueTracker};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// PR title check against a tracker.
pub struct TitleCheck {
    validator: TitleValidator,
    extractor: IssueKeyExtractor,
    tracker: Arc<dyn IssueTracker>,
}

impl TitleCheck {
    /// Check with the built-in title conventions.
    pub fn new(tracker: Arc<dyn IssueTracker>) -> Result<Self> {
        Ok(Self::with_rules(
            TitleValidator::new()?,
            IssueKeyExtractor::new()?,
            tracker,
        ))
    }

    pub fn with_rules(
        validator: TitleValidator,
        extractor: IssueKeyExtractor,
        tracker: Arc<dyn IssueTracker>,
    ) -> Self {
        Self {
            validator,
            extractor,
            tracker,
        }
    }

    /// Run the full check for the event file at `event_path`.
    pub async fn run(&self, event_path: Option<&Path>) -> Result<Outcome> {
        let Some(path) = event_path.filter(|p| !p.as_os_str().is_empty()) else {
            warn!("No event path configured");
            return Ok(Outcome::EventPathMissing);
        };

        let event = PullRequestEvent::load(path)?;
        let Some(title) = event.title() else {
            warn!(number = ?event.number(), "Pull request has no title");
            return Ok(Outcome::TitleMissing);
        };

        info!(number = ?event.number(), title, "Checking pull request title");
        Ok(self.check_title(title).await)
    }

    /// Check a title directly.
    pub async fn check_title(&self, title: &str) -> Outcome {
        let Some(pattern) = self.validator.matching_pattern(title) else {
            warn!(title, "Title matches no convention");
            return Outcome::TitleInvalid;
        };
        debug!(title, pattern, "Title accepted");

        let Some(issue_key) = self.extractor.extract(title) else {
            warn!(title, pattern, "Title carries no issue key");
            return Outcome::IssueKeyMissing;
        };

        if let Some(e) = self.tracker.configuration_error() {
            warn!(issue_key, error = %e, "Skipping lookup, Jira is not configured");
            return Outcome::TrackerNotConfigured {
                detail: e.to_string(),
            };
        }

        let issue_key = issue_key.to_string();
        match self.tracker.lookup(&issue_key).await {
            IssueStatus::Valid => Outcome::Valid { issue_key },
            IssueStatus::Invalid { status } => Outcome::IssueNotFound { issue_key, status },
            IssueStatus::LookupError { reason } => Outcome::LookupFailed { issue_key, reason },
        }
    }
}
