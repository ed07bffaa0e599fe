//! Eligibility gates - pure functions for the merge policy
//!
//! No I/O happens here - all data is passed in, making it easy to unit
//! test the boundary cases of the check gate.

use crate::types::{CheckConclusion, CheckRunList, CheckStatus, PullRequestSummary};

/// The configured merge-eligibility policy
///
/// Both labels must be present on a pull request for it to be a merge
/// candidate. Label names are compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePolicy {
    /// Label marking a PR as ready to merge
    pub ready_label: String,
    /// Label marking a PR as approved
    pub approved_label: String,
}

impl MergePolicy {
    /// Create a policy from the two configured label names
    pub fn new(ready_label: impl Into<String>, approved_label: impl Into<String>) -> Self {
        Self {
            ready_label: ready_label.into(),
            approved_label: approved_label.into(),
        }
    }
}

/// Why a labelled, otherwise-candidate PR was skipped
///
/// These are normal policy outcomes, not errors; each produces one
/// info-level log line naming the PR number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The host reports the PR as not mergeable (conflicts or unknown)
    NotMergeable,
    /// The head reference has no check runs at all
    NoChecks,
    /// At least one considered check run is pending or did not succeed
    ChecksNotPassing,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotMergeable => write!(f, "not mergeable"),
            Self::NoChecks => write!(f, "no checks"),
            Self::ChecksNotPassing => write!(f, "failing checks"),
        }
    }
}

/// Verdict of the check gate for one head reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksVerdict {
    /// Every considered check run completed successfully
    Passing,
    /// No check runs exist - not yet verifiable, never merged
    NoChecks,
    /// A considered check run is pending or concluded without success
    NotPassing,
}

impl ChecksVerdict {
    /// The skip reason for a non-passing verdict, if any
    pub fn skip_reason(self) -> Option<SkipReason> {
        match self {
            Self::Passing => None,
            Self::NoChecks => Some(SkipReason::NoChecks),
            Self::NotPassing => Some(SkipReason::ChecksNotPassing),
        }
    }
}

/// Label filter: does the PR carry both configured labels?
pub fn has_required_labels(pr: &PullRequestSummary, policy: &MergePolicy) -> bool {
    pr.has_label(&policy.ready_label) && pr.has_label(&policy.approved_label)
}

/// Check gate: evaluate the check runs for one head reference
///
/// An empty set is `NoChecks` - absence of checks is not treated as
/// success. Otherwise a run is excluded from consideration only when it
/// is both completed and cancelled; every run that stays in must be
/// completed with a success conclusion. The two exclusion conditions
/// interact deliberately: a completed/failure run is kept and fails the
/// success requirement, and an in-progress run is kept (its status is
/// not completed) and fails the same requirement.
pub fn checks_verdict(checks: &CheckRunList) -> ChecksVerdict {
    if checks.is_empty() {
        return ChecksVerdict::NoChecks;
    }

    let all_passed = checks
        .runs
        .iter()
        .filter(|run| {
            !(run.status == CheckStatus::Completed
                && run.conclusion == Some(CheckConclusion::Cancelled))
        })
        .all(|run| run.passed());

    if all_passed {
        ChecksVerdict::Passing
    } else {
        ChecksVerdict::NotPassing
    }
}
