//! pr-tree binary entry point

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pr_tree::cli::{Cli, Output};
use pr_tree::github::GithubClient;
use pr_tree::report;

/// Environment variable holding the API bearer token
const TOKEN_VAR: &str = "GITHUB_API_KEY";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Usage errors exit silently; the status code is the contract
    let Some(org) = cli.org.filter(|o| !o.is_empty()) else {
        process::exit(1);
    };
    let Ok(token) = std::env::var(TOKEN_VAR) else {
        process::exit(1);
    };
    if token.is_empty() {
        process::exit(1);
    }

    if let Err(err) = run(&org, &token, cli.api_url.as_deref()).await {
        Output::error(&format!("{err:#}"));
        process::exit(1);
    }
}

async fn run(org: &str, token: &str, api_url: Option<&str>) -> anyhow::Result<()> {
    let client = match api_url.filter(|u| !u.is_empty()) {
        Some(base) => GithubClient::with_base_url(token, base)?,
        None => GithubClient::new(token)?,
    };

    let mut stdout = std::io::stdout().lock();
    report::run(&client, org, &mut stdout).await
}
