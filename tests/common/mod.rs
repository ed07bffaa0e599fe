//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{MergePrCall, MockPlatformService};

use label_merge::policy::MergePolicy;
use label_merge::types::{
    CheckConclusion, CheckRun, CheckRunList, CheckStatus, MergeResult, PullRequestDetails,
    PullRequestSummary, RepoConfig,
};

/// Repo config used across tests
pub fn repo_config() -> RepoConfig {
    RepoConfig {
        owner: "acme".to_string(),
        repo: "widgets".to_string(),
        host: None,
    }
}

/// The policy used across tests: ready + approved
pub fn test_policy() -> MergePolicy {
    MergePolicy::new("ready", "approved")
}

/// Build a PR summary with the given labels
pub fn make_summary(number: u64, labels: &[&str]) -> PullRequestSummary {
    PullRequestSummary {
        number,
        labels: labels.iter().map(ToString::to_string).collect(),
        head_ref: format!("feature-{number}"),
        title: format!("PR {number}"),
    }
}

/// Build PR details with the given mergeable flag
pub fn make_details(number: u64, mergeable: Option<bool>) -> PullRequestDetails {
    PullRequestDetails {
        number,
        title: format!("PR {number}"),
        mergeable,
        head_ref: format!("feature-{number}"),
        html_url: format!("https://github.com/acme/widgets/pull/{number}"),
    }
}

/// Build a check run
pub fn make_run(name: &str, status: CheckStatus, conclusion: Option<CheckConclusion>) -> CheckRun {
    CheckRun {
        name: name.to_string(),
        status,
        conclusion,
    }
}

/// Build a check run list from runs (count kept consistent)
pub fn make_checks(runs: Vec<CheckRun>) -> CheckRunList {
    CheckRunList::from_runs(runs)
}

/// A successful merge response
pub fn merged_ok(number: u64) -> MergeResult {
    MergeResult {
        merged: true,
        sha: Some(format!("sha-{number}")),
        message: None,
    }
}

/// Wire up a fully eligible PR on the mock: both labels, mergeable,
/// one passing check run, and a successful merge response
pub fn setup_eligible_pr(mock: &MockPlatformService, number: u64) {
    mock.add_open_pr(make_summary(number, &["ready", "approved"]));
    mock.set_details_response(number, make_details(number, Some(true)));
    mock.set_check_runs_response(
        &format!("feature-{number}"),
        make_checks(vec![make_run(
            "build",
            CheckStatus::Completed,
            Some(CheckConclusion::Success),
        )]),
    );
    mock.set_merge_response(number, merged_ok(number));
}
