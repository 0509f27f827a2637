use crate::chart::svg::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::github::{ClientConfig, API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::RepoSlug;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "github-star-chart")]
#[command(about = "GitHub Star Chart - Fetches repositories and plots their star counts")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Repositories to chart, as owner/repo
    #[arg(required = true, value_name = "OWNER/REPO")]
    pub repos: Vec<RepoSlug>,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "GITHUB_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Also save the chart as an SVG file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// SVG width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// SVG height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
