use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Parser)]
#[command(
    name = "signoff-action",
    about = "Check that every commit in a pull request carries a Signed-off-by trailer"
)]
pub struct ActionConfig {
    /// Token used to authenticate with the GitHub API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GitHub REST API base URL (GitHub Enterprise sets this)
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Path to the JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// Name of the triggering event, logged for diagnostics
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// File that step outputs are appended to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_path: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(
        long,
        env = "SIGNOFF_HTTP_TIMEOUT",
        default_value = "30",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub http_timeout: u64,
}

impl ActionConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

/// Message to report as a failed step, or `None` for `--help`/`--version`,
/// which clap should print and exit on as usual.
pub fn failure_message(err: &clap::Error) -> Option<String> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => Some(err.render().to_string().trim_end().to_string()),
    }
}
