//! titlegate - pull-request title gate for CI
//!
//! Validates a pull-request title read from the CI event payload:
//! - Matches the title against the accepted naming conventions
//! - Extracts the Jira issue key embedded in the title
//! - Confirms the issue exists in Jira
//! - Maps the result to a console verdict and process exit code

pub mod check;
pub mod config;
pub mod error;
pub mod event;
pub mod issue_key;
pub mod outcome;
pub mod telemetry;
pub mod title;
pub mod tracker;

// Re-export key types
pub use check::TitleCheck;
pub use config::TrackerConfig;
pub use error::{Result, TitleGateError};
pub use event::{PullRequest, PullRequestEvent, EVENT_PATH_VAR};
pub use issue_key::IssueKeyExtractor;
pub use outcome::Outcome;
pub use telemetry::init_tracing;
pub use title::{TitlePattern, TitleValidator, TITLE_PATTERNS};
pub use tracker::{IssueStatus, IssueTracker, JiraClient};

/// titlegate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
