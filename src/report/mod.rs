//! Fetch-sort-render pipeline for the review tree
//!
//! Lists every repository of an organization, then renders one block per
//! open pull request with its owner, requested reviewers and assignee.

pub mod tree;

use std::cmp::Ordering;
use std::io::Write;

use anyhow::Context;
use tracing::debug;

use crate::github::{GithubApi, Repository};

/// Repository ordering used by the report: ascending by name
fn by_name(a: &Repository, b: &Repository) -> Ordering {
    a.name.cmp(&b.name)
}

/// Fetch every repository of the organization, sorted ascending by name
pub async fn list_repositories(
    api: &impl GithubApi,
    org: &str,
) -> anyhow::Result<Vec<Repository>> {
    let mut repos = Vec::new();
    let mut page = 1;

    loop {
        let batch = api
            .org_repos(org, page)
            .await
            .with_context(|| format!("listing repositories of {org}"))?;
        repos.extend(batch.repos);

        match batch.next_page {
            Some(next) => page = next,
            None => break,
        }
    }

    debug!(count = repos.len(), "accumulated repositories");
    repos.sort_by(by_name);
    Ok(repos)
}

/// Render the repository → pull request → people tree to `out`
///
/// Repositories must already be in display order. A repository without
/// open pull requests contributes no lines, not even a header.
pub async fn print_pull_requests(
    api: &impl GithubApi,
    org: &str,
    repos: &[Repository],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for (i, repo) in repos.iter().enumerate() {
        let pulls = api
            .open_pull_requests(org, &repo.name)
            .await
            .with_context(|| format!("listing pull requests of {org}/{}", repo.name))?;

        if pulls.is_empty() {
            continue;
        }

        let repo_conn = tree::connector(i, repos.len());
        let repo_guide = tree::guide(i, repos.len());
        writeln!(out, "{repo_conn} {}:", repo.name)?;

        for (j, pull) in pulls.iter().enumerate() {
            let reviewers = api
                .requested_reviewers(org, &repo.name, pull.number)
                .await
                .with_context(|| {
                    format!("listing reviewers of {org}/{} #{}", repo.name, pull.number)
                })?;

            let pr_conn = tree::connector(j, pulls.len());
            let pr_guide = tree::guide(j, pulls.len());
            writeln!(out, "{repo_guide} {pr_conn} PR: {}", pull.title)?;

            let owner = pull.owner_login();
            let assignee = pull.assignee_login();
            let has_assignee = !assignee.is_empty();

            let owner_present = !owner.is_empty();
            let run_len = reviewers.users.len() + usize::from(owner_present);

            if owner_present {
                let conn = tree::run_connector(0, run_len, has_assignee);
                writeln!(out, "{repo_guide} {pr_guide} {conn} Owner: {owner}")?;
            }

            for (k, reviewer) in reviewers.users.iter().enumerate() {
                let conn =
                    tree::run_connector(k + usize::from(owner_present), run_len, has_assignee);
                // numbering restarts at 1 for every pull request
                writeln!(
                    out,
                    "{repo_guide} {pr_guide} {conn} Reviewer {}: {}",
                    k + 1,
                    reviewer.login
                )?;
            }

            if has_assignee {
                let conn = tree::assignee_connector();
                writeln!(out, "{repo_guide} {pr_guide} {conn} Assignee: {assignee}")?;
            }
        }
    }

    Ok(())
}

/// Run the whole pipeline: list, sort, report
pub async fn run(api: &impl GithubApi, org: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let repos = list_repositories(api, org).await?;
    print_pull_requests(api, org, &repos, out).await
}
