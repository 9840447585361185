//! GitHub API access
//!
//! A thin typed wrapper over the three REST endpoints the report needs,
//! behind a trait so tests can substitute the client.

pub mod client;
pub mod models;

pub use client::{GithubClient, PAGE_SIZE};
pub use models::{PullRequest, RepoPage, Repository, RequestedReviewers, User};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to the API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub returned {status} for {url}: {message}")]
    Api {
        status: reqwest::StatusCode,
        url: String,
        message: String,
    },

    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("token is not usable as a header value: {0}")]
    Token(#[from] reqwest::header::InvalidHeaderValue),
}

/// The GitHub calls the report depends on
#[async_trait]
pub trait GithubApi {
    /// Fetch one page of an organization's repositories
    async fn org_repos(&self, org: &str, page: u32) -> Result<RepoPage, ApiError>;

    /// Fetch the open pull requests of a repository
    async fn open_pull_requests(
        &self,
        org: &str,
        repo: &str,
    ) -> Result<Vec<PullRequest>, ApiError>;

    /// Fetch the requested reviewers of a pull request, in request order
    async fn requested_reviewers(
        &self,
        org: &str,
        repo: &str,
        number: u64,
    ) -> Result<RequestedReviewers, ApiError>;
}
