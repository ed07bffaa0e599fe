//! Policy evaluation - the effectful sequential pass
//!
//! Takes the open pull requests (listed by the caller) and the platform
//! collaborators, applies the gates in input order, and issues a merge
//! call for each qualifying PR. Everything runs on one logical task;
//! the first collaborator error aborts the whole run.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::policy::gates::{MergePolicy, SkipReason, checks_verdict, has_required_labels};
use crate::types::{MergeMethod, PullRequestSummary};
use tracing::{debug, info, warn};

/// Options for an evaluation pass
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateOptions {
    /// Merge method to use for qualifying PRs
    pub method: MergeMethod,
    /// Report eligibility without issuing merge calls
    pub dry_run: bool,
}

/// Aggregate outcome of one evaluation pass
///
/// Deliberately carries only the "did at least one merge occur" bit;
/// which PRs merged is visible only in the log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOutcome {
    /// Whether at least one merge occurred
    pub merged: bool,
}

/// Evaluate the merge policy over the open pull requests
///
/// Each candidate passes three gates before the merge call:
/// 1. Label filter - both configured labels present
/// 2. Mergeability gate - the host reports `mergeable == Some(true)`
/// 3. Check gate - see [`checks_verdict`]
///
/// Skips are logged and processing continues; any collaborator error
/// aborts immediately with no per-PR isolation. Each PR is merged at
/// most once per pass.
pub async fn evaluate(
    open_prs: &[PullRequestSummary],
    platform: &dyn PlatformService,
    policy: &MergePolicy,
    options: EvaluateOptions,
) -> Result<EvaluationOutcome> {
    let mut outcome = EvaluationOutcome::default();

    for pr in open_prs {
        if !has_required_labels(pr, policy) {
            debug!(pr_number = pr.number, "missing required labels, not a candidate");
            continue;
        }

        let details = platform.get_pr_details(pr.number).await?;
        if details.mergeable != Some(true) {
            // Covers both confirmed conflicts and mergeability the host
            // has not finished computing.
            info!(pr_number = pr.number, reason = %SkipReason::NotMergeable, "skipping PR");
            continue;
        }

        let checks = platform.list_check_runs(&details.head_ref).await?;
        if let Some(reason) = checks_verdict(&checks).skip_reason() {
            info!(pr_number = pr.number, %reason, "skipping PR");
            continue;
        }

        if options.dry_run {
            info!(pr_number = pr.number, title = %pr.title, "eligible (dry run, not merging)");
            continue;
        }

        let result = platform.merge_pr(pr.number, options.method).await?;
        if result.merged {
            info!(pr_number = pr.number, title = %pr.title, sha = ?result.sha, "merged PR");
            outcome.merged = true;
        } else {
            warn!(
                pr_number = pr.number,
                message = result.message.as_deref().unwrap_or("(no message)"),
                "merge call did not merge"
            );
        }
    }

    Ok(outcome)
}
