//! Fetch GitHub repository metadata and chart its star count.
//!
//! ```no_run
//! use github_star_chart::chart::{visualize, TerminalRenderer};
//! use github_star_chart::github::GitHubClient;
//!
//! # async fn run() -> github_star_chart::error::Result<()> {
//! let client = GitHubClient::new(std::env::var("GITHUB_TOKEN").unwrap_or_default())?;
//! let repo = client.fetch("rust-lang", "rust").await?;
//! visualize(&repo, &TerminalRenderer::default())?;
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod cli;
pub mod error;
pub mod github;
pub mod types;

pub use chart::{Bar, BarChart, ChartRenderer};
pub use error::{Result, StarChartError};
pub use github::{ClientConfig, GitHubClient};
pub use types::{RepoSlug, RepositoryDescriptor};
