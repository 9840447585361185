//! reqwest-backed GitHub client

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::models::{PullRequest, RepoPage, Repository, RequestedReviewers};
use super::{ApiError, GithubApi};

/// Repositories requested per listing page
pub const PAGE_SIZE: u32 = 100;

const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Error body shape GitHub uses for non-2xx responses
#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

/// Authenticated client for the GitHub REST API
pub struct GithubClient {
    http: reqwest::Client,
    base: Url,
}

impl GithubClient {
    /// Build a client against api.github.com
    pub fn new(token: &str) -> Result<Self, ApiError> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Build a client against a custom API root (GitHub Enterprise, tests)
    pub fn with_base_url(token: &str, base: &str) -> Result<Self, ApiError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        // Url::join drops the last path segment without this
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{base}/"))?
        };

        Ok(Self { http, base })
    }

    /// Issue a GET and decode the JSON body, keeping the response headers
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<(T, HeaderMap), ApiError> {
        debug!(%url, "GET");

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let bytes = resp.bytes().await?;
            let message = serde_json::from_slice::<ApiMessage>(&bytes)
                .map(|m| m.message)
                .unwrap_or_else(|_| {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                });
            return Err(ApiError::Api {
                status,
                url: url.to_string(),
                message,
            });
        }

        let headers = resp.headers().clone();
        let body = resp.json().await?;
        Ok((body, headers))
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn org_repos(&self, org: &str, page: u32) -> Result<RepoPage, ApiError> {
        let mut url = self.base.join(&format!("orgs/{org}/repos"))?;
        url.query_pairs_mut()
            .append_pair("per_page", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string());

        let (repos, headers) = self.get_json::<Vec<Repository>>(url).await?;
        Ok(RepoPage {
            repos,
            next_page: next_page(&headers),
        })
    }

    async fn open_pull_requests(
        &self,
        org: &str,
        repo: &str,
    ) -> Result<Vec<PullRequest>, ApiError> {
        // The endpoint defaults to state=open, the filter this report wants
        let url = self.base.join(&format!("repos/{org}/{repo}/pulls"))?;
        let (pulls, _) = self.get_json(url).await?;
        Ok(pulls)
    }

    async fn requested_reviewers(
        &self,
        org: &str,
        repo: &str,
        number: u64,
    ) -> Result<RequestedReviewers, ApiError> {
        let url = self
            .base
            .join(&format!("repos/{org}/{repo}/pulls/{number}/requested_reviewers"))?;
        let (reviewers, _) = self.get_json(url).await?;
        Ok(reviewers)
    }
}

/// Page number advertised by the `rel="next"` entry of the `Link` header
///
/// GitHub omits the entry (usually the whole header) on the last page.
fn next_page(headers: &HeaderMap) -> Option<u32> {
    let link = headers.get(LINK)?.to_str().ok()?;
    next_page_from_link(link)
}

fn next_page_from_link(link: &str) -> Option<u32> {
    for entry in link.split(',') {
        let mut pieces = entry.split(';');
        let target = pieces.next().unwrap_or("").trim();

        if !pieces.any(|p| p.trim() == r#"rel="next""#) {
            continue;
        }

        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;
        return url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok());
    }

    None
}
