//! Core types for label-merge

use serde::{Deserialize, Serialize};

/// An open pull request as returned by the list endpoint
///
/// Carries just enough for the label filter; everything else is fetched
/// per candidate via [`PullRequestDetails`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// PR number
    pub number: u64,
    /// Label names attached to the PR (membership tested as a set;
    /// order and duplicates are irrelevant)
    pub labels: Vec<String>,
    /// Head branch name
    pub head_ref: String,
    /// PR title (for log lines)
    pub title: String,
}

impl PullRequestSummary {
    /// Set-membership test by exact string equality
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// Per-candidate detail fetched before the merge decision
///
/// An immutable snapshot; it may be stale by the time of merge. A race
/// with concurrent repository changes is an accepted external risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetails {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Whether the PR can be merged without conflict
    /// - `Some(true)` = mergeable
    /// - `Some(false)` = has conflicts
    /// - `None` = unknown (GitHub still computing)
    pub mergeable: Option<bool>,
    /// Head branch name
    pub head_ref: String,
    /// Web URL for the PR
    pub html_url: String,
}

/// Lifecycle status of a check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Queued but not started
    Queued,
    /// Currently running
    InProgress,
    /// Finished; see the conclusion
    Completed,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Terminal result of a completed check run
///
/// GitHub's documented conclusion set. Only meaningful when the run's
/// status is [`CheckStatus::Completed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckConclusion {
    /// Passed
    Success,
    /// Failed
    Failure,
    /// Neither passed nor failed
    Neutral,
    /// Cancelled before finishing
    Cancelled,
    /// Skipped entirely
    Skipped,
    /// Exceeded its time budget
    TimedOut,
    /// Waiting on a required action
    ActionRequired,
    /// Invalidated by a newer push
    Stale,
    /// Failed while starting up
    StartupFailure,
}

impl std::fmt::Display for CheckConclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Neutral => "neutral",
            Self::Cancelled => "cancelled",
            Self::Skipped => "skipped",
            Self::TimedOut => "timed_out",
            Self::ActionRequired => "action_required",
            Self::Stale => "stale",
            Self::StartupFailure => "startup_failure",
        };
        write!(f, "{s}")
    }
}

/// A single status-check result for a commit reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckRun {
    /// Check run name (for log lines)
    pub name: String,
    /// Lifecycle status
    pub status: CheckStatus,
    /// Terminal result; `None` until the run completes
    pub conclusion: Option<CheckConclusion>,
}

impl CheckRun {
    /// Whether this run completed with a success conclusion
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Completed && self.conclusion == Some(CheckConclusion::Success)
    }
}

/// Check runs for one commit reference
///
/// Mirrors the check-runs API response: a total count alongside the
/// (single-page) sequence of runs.
#[derive(Debug, Clone, Default)]
pub struct CheckRunList {
    /// Total number of check runs the host reports for the reference
    pub total_count: u32,
    /// The check runs themselves
    pub runs: Vec<CheckRun>,
}

impl CheckRunList {
    /// Whether the reference has no check runs at all
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Convenience constructor keeping the count consistent with the runs
    pub fn from_runs(runs: Vec<CheckRun>) -> Self {
        Self {
            total_count: runs.len() as u32,
            runs,
        }
    }
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMethod {
    /// Create a merge commit (the host default)
    #[default]
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto the base branch
    Rebase,
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Squash => write!(f, "squash"),
            Self::Rebase => write!(f, "rebase"),
        }
    }
}

impl std::str::FromStr for MergeMethod {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "merge" => Ok(Self::Merge),
            "squash" => Ok(Self::Squash),
            "rebase" => Ok(Self::Rebase),
            other => Err(crate::error::Error::Config(format!(
                "invalid merge method '{other}' (expected merge, squash, or rebase)"
            ))),
        }
    }
}

/// Result of a merge operation
#[derive(Debug, Clone)]
pub struct MergeResult {
    /// Whether the merge was successful
    pub merged: bool,
    /// The SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Message from the merge operation (especially on failure)
    pub message: Option<String>,
}

/// Repository identity, threaded explicitly through every platform call
///
/// Never read from ambient context; the CLI builds one from the
/// `owner/repo` configuration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

impl std::fmt::Display for RepoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
