//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{
    CheckConclusion, CheckRun, CheckRunList, CheckStatus, MergeMethod, MergeResult,
    PullRequestDetails, PullRequestSummary, RepoConfig,
};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Single page of results; pagination is out of scope.
const PAGE_SIZE: u8 = 100;

/// GitHub service using octocrab
///
/// Pull request operations go through octocrab; check runs go through a
/// raw HTTP request because octocrab does not expose the check-runs
/// listing for a commit reference.
pub struct GitHubService {
    client: Octocrab,
    config: RepoConfig,
    /// Token for raw HTTP requests (check-run listing)
    token: String,
    /// HTTP client for raw requests (check-run listing)
    http_client: Client,
    /// API host for raw requests
    api_host: String,
}

impl GitHubService {
    /// Create a new GitHub service for one repository
    pub fn new(token: &str, config: RepoConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_host = if let Some(ref h) = config.host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            format!("{h}/api/v3")
        } else {
            "api.github.com".to_string()
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("label-merge")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            token: token.to_string(),
            http_client,
            api_host,
        })
    }
}

/// Helper to convert an octocrab PR to our summary type
fn summary_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequestSummary {
    PullRequestSummary {
        number: pr.number,
        labels: pr
            .labels
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|l| l.name.clone())
            .collect(),
        head_ref: pr.head.ref_field.clone(),
        title: pr.title.as_deref().unwrap_or_default().to_string(),
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_open_prs(&self) -> Result<Vec<PullRequestSummary>> {
        debug!(repo = %self.config, "listing open PRs");

        let prs = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(octocrab::params::State::Open)
            .per_page(PAGE_SIZE)
            .send()
            .await?;

        let result: Vec<PullRequestSummary> = prs.items.iter().map(summary_from_octocrab).collect();
        debug!(count = result.len(), "listed open PRs");
        Ok(result)
    }

    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        debug!(pr_number, "getting PR details");

        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .get(pr_number)
            .await?;

        let details = PullRequestDetails {
            number: pr.number,
            title: pr.title.as_deref().unwrap_or_default().to_string(),
            mergeable: pr.mergeable,
            head_ref: pr.head.ref_field.clone(),
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        };

        debug!(pr_number, mergeable = ?details.mergeable, "got PR details");
        Ok(details)
    }

    async fn list_check_runs(&self, ref_name: &str) -> Result<CheckRunList> {
        #[derive(Deserialize)]
        struct CheckRunsResponse {
            total_count: u32,
            check_runs: Vec<WireCheckRun>,
        }

        #[derive(Deserialize)]
        struct WireCheckRun {
            name: String,
            status: CheckStatus,
            conclusion: Option<CheckConclusion>,
        }

        debug!(ref_name, "listing check runs");

        let url = format!(
            "https://{}/repos/{}/{}/commits/{}/check-runs",
            self.api_host, self.config.owner, self.config.repo, ref_name
        );

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch check runs: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Check runs request for '{ref_name}' returned {}",
                response.status()
            )));
        }

        let body: CheckRunsResponse = response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse check runs: {e}")))?;

        let list = CheckRunList {
            total_count: body.total_count,
            runs: body
                .check_runs
                .into_iter()
                .map(|r| CheckRun {
                    name: r.name,
                    status: r.status,
                    conclusion: r.conclusion,
                })
                .collect(),
        };

        debug!(ref_name, count = list.total_count, "listed check runs");
        Ok(list)
    }

    async fn merge_pr(&self, pr_number: u64, method: MergeMethod) -> Result<MergeResult> {
        debug!(pr_number, %method, "merging PR");

        let octocrab_method = match method {
            MergeMethod::Merge => octocrab::params::pulls::MergeMethod::Merge,
            MergeMethod::Squash => octocrab::params::pulls::MergeMethod::Squash,
            MergeMethod::Rebase => octocrab::params::pulls::MergeMethod::Rebase,
        };

        let result = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .merge(pr_number)
            .method(octocrab_method)
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Merge failed: {e}")))?;

        let merge_result = MergeResult {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            pr_number,
            merged = merge_result.merged,
            sha = ?merge_result.sha,
            "merge complete"
        );
        Ok(merge_result)
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
