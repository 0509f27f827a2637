use clap::Parser;
use colored::*;
use github_star_chart::chart::{BarChart, ChartRenderer, SvgRenderer, TerminalRenderer};
use github_star_chart::cli::Cli;
use github_star_chart::error::{Result, StarChartError};
use github_star_chart::github::GitHubClient;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.token.trim().is_empty() {
        return Err(StarChartError::EnvError(
            "GITHUB_TOKEN is empty; pass --token or set it in the environment".to_string(),
        ));
    }

    println!("{}", "GitHub Star Chart".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let client = GitHubClient::with_config(cli.token.clone(), cli.client_config())?;
    info!(base_url = %client.base_url(), repos = cli.repos.len(), "Fetching repositories");

    let descriptors = client.fetch_many(&cli.repos).await.map_err(|e| {
        error!("Failed to fetch repositories: {}", e);
        e
    })?;

    let chart = BarChart::from_descriptors(&descriptors)?;
    let terminal = TerminalRenderer {
        color: !cli.no_color,
        ..Default::default()
    };
    terminal.render(&chart)?;

    if let Some(path) = &cli.output {
        SvgRenderer::new(path)
            .with_size(cli.width, cli.height)
            .render(&chart)?;
        println!("\n✅ Chart saved to {}", path.display());
    }

    Ok(())
}
