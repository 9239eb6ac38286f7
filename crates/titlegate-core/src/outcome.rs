//! Check verdicts and their console rendering.
//!
//! Every outcome prints at least one line and maps to an exit code; only
//! [`Outcome::Valid`] exits 0. The message text is grepped by log
//! dashboards, so it is kept stable.

use std::io::Write;

/// Terminal state of a title check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `GITHUB_EVENT_PATH` unset or empty.
    EventPathMissing,
    /// Event has no PR title.
    TitleMissing,
    /// Title matched no convention.
    TitleInvalid,
    /// Title accepted but carries no issue key.
    IssueKeyMissing,
    /// Tracker answered with a non-200 status.
    IssueNotFound { issue_key: String, status: u16 },
    /// Tracker could not be reached.
    LookupFailed { issue_key: String, reason: String },
    /// Tracker settings are empty or placeholders.
    TrackerNotConfigured { detail: String },
    /// Title and issue key both check out.
    Valid { issue_key: String },
    /// Any error that escaped the checks above.
    Unexpected { message: String },
}

impl Outcome {
    /// Console lines, in print order.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Outcome::EventPathMissing => {
                vec!["❌❌GITHUB_EVENT_PATH environment variable not set.❌❌".to_string()]
            }
            Outcome::TitleMissing => vec![
                "❌❌PR doesn't have a title, please add one that follows our guidelines.❌❌"
                    .to_string(),
            ],
            Outcome::TitleInvalid => vec![
                "❌❌ PR title is invalid. It does not match any of the required patterns.❌❌"
                    .to_string(),
            ],
            Outcome::IssueKeyMissing => vec![
                "❌❌ Extracted JIRA ID is empty or null. Please check the PR title format.❌❌"
                    .to_string(),
            ],
            Outcome::IssueNotFound { status, .. } => vec![
                format!("JIRA issue check failed with status code: {status}"),
                "❌❌ JIRA ID is invalid or not found.❌❌".to_string(),
            ],
            Outcome::LookupFailed { reason, .. } => vec![
                format!("Error in connecting to JIRA: {reason}"),
                "❌❌Error occurred while validating JIRA ID❌❌".to_string(),
            ],
            Outcome::TrackerNotConfigured { detail } => {
                vec![format!("❌❌ JIRA credentials are not configured: {detail}❌❌")]
            }
            Outcome::Valid { .. } => vec!["✅✅ PR Title and JIRA ID are Valid.✅✅".to_string()],
            Outcome::Unexpected { message } => vec![format!("Error: {message}")],
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Valid { .. })
    }

    /// Process exit code: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Write the console lines to `out`.
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}
