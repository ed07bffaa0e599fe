//! Platform services for the repository host
//!
//! Provides the collaborator seam the merge-policy evaluator is layered
//! on, so a test double can substitute deterministic responses.

mod github;

pub use github::GitHubService;

use crate::error::{Error, Result};
use crate::types::{
    CheckRunList, MergeMethod, MergeResult, PullRequestDetails, PullRequestSummary, RepoConfig,
};
use async_trait::async_trait;

/// Platform service trait for pull request operations
///
/// Exactly the capability set the evaluator consumes: list candidates,
/// fetch per-candidate detail, fetch check runs for a reference, and
/// execute a merge. Every call carries the repository identity via the
/// service's [`RepoConfig`] rather than ambient context.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List currently open pull requests (a single page, in host order)
    async fn list_open_prs(&self) -> Result<Vec<PullRequestSummary>>;

    /// Get per-candidate detail for one pull request
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails>;

    /// List check runs for a commit reference
    async fn list_check_runs(&self, ref_name: &str) -> Result<CheckRunList>;

    /// Merge a pull request with the specified method
    async fn merge_pr(&self, pr_number: u64, method: MergeMethod) -> Result<MergeResult>;

    /// Get the repository configuration
    fn config(&self) -> &RepoConfig;
}

/// Parse an `owner/repo` string (the `GITHUB_REPOSITORY` form) into a
/// [`RepoConfig`]
///
/// # Errors
/// Returns a configuration error when the input is not exactly
/// `owner/repo` with both parts non-empty.
pub fn parse_repo(repo: &str, host: Option<String>) -> Result<RepoConfig> {
    let mut parts = repo.splitn(2, '/');
    let owner = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();

    if owner.is_empty() || name.is_empty() {
        return Err(Error::Config(format!(
            "invalid repository '{repo}': expected owner/repo"
        )));
    }

    Ok(RepoConfig {
        owner: owner.to_string(),
        repo: name.to_string(),
        host,
    })
}
