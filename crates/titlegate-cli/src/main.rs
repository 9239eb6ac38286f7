//! titlegate - PR title gate for CI
//!
//! Reads the pull-request event written by the CI host, checks the title
//! against the naming conventions, confirms the referenced Jira issue
//! exists and exits 0 (pass) or 1 (fail).
//!
//! Every setting can come from a flag or its environment variable:
//!
//! - `--event-path` / `GITHUB_EVENT_PATH`
//! - `--jira-base-url` / `JIRA_BASE_URL`
//! - `--jira-api-token` / `JIRA_API_TOKEN`
//! - `--jira-user-email` / `JIRA_USER_EMAIL`
//! - `--jira-api-version` / `JIRA_API_VERSION`
//! - `--timeout-secs` / `JIRA_TIMEOUT_SECS`

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use titlegate_core::config::{
    API_TOKEN_VAR, API_VERSION_VAR, BASE_URL_VAR, DEFAULT_API_VERSION, PLACEHOLDER_API_TOKEN,
    PLACEHOLDER_BASE_URL, PLACEHOLDER_USER_EMAIL, TIMEOUT_VAR, USER_EMAIL_VAR,
};
use titlegate_core::{JiraClient, Outcome, TitleCheck, TrackerConfig, EVENT_PATH_VAR};
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(name = "titlegate")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate a pull-request title and its Jira issue", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Path to the pull-request event payload (JSON)
    #[arg(long, env = EVENT_PATH_VAR)]
    event_path: Option<PathBuf>,

    /// Jira site URL
    #[arg(long, env = BASE_URL_VAR, default_value = PLACEHOLDER_BASE_URL)]
    jira_base_url: String,

    /// Jira API token
    #[arg(
        long,
        env = API_TOKEN_VAR,
        default_value = PLACEHOLDER_API_TOKEN,
        hide_env_values = true,
        hide_default_value = true
    )]
    jira_api_token: String,

    /// Jira account email used with the API token
    #[arg(long, env = USER_EMAIL_VAR, default_value = PLACEHOLDER_USER_EMAIL)]
    jira_user_email: String,

    /// Jira REST API version
    #[arg(long, env = API_VERSION_VAR, default_value = DEFAULT_API_VERSION)]
    jira_api_version: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = TIMEOUT_VAR)]
    timeout_secs: Option<u64>,
}

impl Cli {
    fn tracker_config(&self) -> TrackerConfig {
        let config = TrackerConfig::new(
            &self.jira_base_url,
            &self.jira_user_email,
            &self.jira_api_token,
        )
        .with_api_version(&self.jira_api_version);

        match self.timeout_secs {
            Some(secs) if secs > 0 => config.with_timeout(Duration::from_secs(secs)),
            _ => config,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    titlegate_core::init_tracing(cli.json, level);

    let outcome = run(&cli).await.unwrap_or_else(|e| Outcome::Unexpected {
        message: e.to_string(),
    });

    if let Err(e) = outcome.report(&mut std::io::stdout().lock()) {
        eprintln!("Error: failed to write verdict: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::from(outcome.exit_code())
}

async fn run(cli: &Cli) -> Result<Outcome> {
    let client = JiraClient::new(cli.tracker_config())?;
    debug!(config = ?client.config(), "Tracker configuration");
    let check = TitleCheck::new(Arc::new(client))?;
    let outcome = check.run(cli.event_path.as_deref()).await?;

    info!(?outcome, exit_code = outcome.exit_code(), "Title check finished");
    Ok(outcome)
}
