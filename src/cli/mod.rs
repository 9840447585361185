//! Command-line interface definition

pub mod output;

pub use output::Output;

use clap::Parser;

/// List open pull requests across a GitHub organization as a review tree
#[derive(Debug, Parser)]
#[command(name = "pr-tree", version, about)]
pub struct Cli {
    /// Organization whose repositories are scanned
    ///
    /// Validated by the entry point so absence exits with status 1
    /// rather than clap's usage error.
    pub org: Option<String>,

    /// API root to talk to instead of api.github.com
    #[arg(long, value_name = "URL", env = "GITHUB_API_URL", hide_env_values = true)]
    pub api_url: Option<String>,
}
