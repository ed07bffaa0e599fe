//! Merge-policy evaluation
//!
//! Two-layer pattern:
//! 1. Gates - pure eligibility predicates (testable without I/O)
//! 2. Evaluate - sequential effectful pass over the open PRs

mod evaluate;
mod gates;

pub use evaluate::{EvaluateOptions, EvaluationOutcome, evaluate};
pub use gates::{ChecksVerdict, MergePolicy, SkipReason, checks_verdict, has_required_labels};
