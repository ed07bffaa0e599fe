//! The evaluation run - wire configuration to the evaluator
//!
//! Builds the platform service from configuration, lists the open PRs,
//! runs one evaluation pass, and emits the process-level outcome. When
//! `GITHUB_OUTPUT` is set (GitHub Actions), the outcome is appended to
//! that file in `merged=<bool>` form; otherwise it goes to stdout.

use crate::cli::style::{Stylize, check};
use anstream::println;
use clap::Parser;
use label_merge::error::{Error, Result};
use label_merge::platform::{GitHubService, PlatformService, parse_repo};
use label_merge::policy::{EvaluateOptions, EvaluationOutcome, MergePolicy, evaluate};
use label_merge::types::MergeMethod;
use std::fs::OpenOptions;
use std::io::Write;

/// Auto-merge pull requests carrying the ready and approved labels with
/// passing checks
#[derive(Parser, Debug)]
#[command(name = "label-merge", version)]
pub struct CliArgs {
    /// Repository in owner/repo form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: String,

    /// Access token for the repository host
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Label marking a PR as ready to merge
    #[arg(long, env = "READY_LABEL")]
    pub ready_label: String,

    /// Label marking a PR as approved
    #[arg(long, env = "APPROVED_LABEL")]
    pub approved_label: String,

    /// Custom GitHub Enterprise host (e.g. github.example.com)
    #[arg(long, env = "GITHUB_HOST")]
    pub host: Option<String>,

    /// Merge method: merge, squash, or rebase
    #[arg(long, default_value = "merge")]
    pub merge_method: MergeMethod,

    /// Report eligible PRs without merging
    #[arg(long)]
    pub dry_run: bool,
}

/// Run one evaluation pass
pub async fn run(args: CliArgs) -> Result<()> {
    let repo = parse_repo(&args.repo, args.host.clone())?;
    let platform = GitHubService::new(&args.token, repo)?;
    let policy = MergePolicy::new(&args.ready_label, &args.approved_label);

    println!(
        "Evaluating open PRs in {} (labels: {}, {})",
        platform.config().to_string().accent(),
        args.ready_label.accent(),
        args.approved_label.accent()
    );

    let open_prs = platform.list_open_prs().await?;
    let options = EvaluateOptions {
        method: args.merge_method,
        dry_run: args.dry_run,
    };
    let outcome = evaluate(&open_prs, &platform, &policy, options).await?;

    if outcome.merged {
        println!("{} Merged at least one pull request", check());
    } else {
        println!("{}", "No pull requests were merged.".muted());
    }

    emit_outcome(&outcome)
}

/// Emit the process-level `merged` signal
fn emit_outcome(outcome: &EvaluationOutcome) -> Result<()> {
    let line = format!("merged={}", outcome.merged);

    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.is_empty() => {
            let mut file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(&path)
                .map_err(|e| {
                    Error::Config(format!("cannot open GITHUB_OUTPUT file '{path}': {e}"))
                })?;
            writeln!(file, "{line}")?;
        }
        _ => println!("{line}"),
    }

    Ok(())
}
