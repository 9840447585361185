//! Typed views of the GitHub REST payloads this tool consumes

use serde::Deserialize;

/// A GitHub user, reduced to its login
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub login: String,
}

/// A repository as returned by the organization listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name, unique within the organization
    pub name: String,
}

/// An open pull request
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// Pull request number, used to fetch its reviewers
    pub number: u64,
    pub title: String,
    /// Author; null in the payload when the account is gone
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub assignee: Option<User>,
}

impl PullRequest {
    /// Author login, or `""` when there is none
    pub fn owner_login(&self) -> &str {
        self.user.as_ref().map(|u| u.login.as_str()).unwrap_or("")
    }

    /// Assignee login, or `""` when there is none
    pub fn assignee_login(&self) -> &str {
        self.assignee
            .as_ref()
            .map(|u| u.login.as_str())
            .unwrap_or("")
    }
}

/// Requested reviewers of a pull request, in request order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestedReviewers {
    #[serde(default)]
    pub users: Vec<User>,
}

/// One page of the repository listing plus its pagination indicator
#[derive(Debug, Clone)]
pub struct RepoPage {
    pub repos: Vec<Repository>,
    /// Page number advertised by the `Link` header; `None` on the last page
    pub next_page: Option<u32>,
}
