//! label-merge - auto-merge pull requests that satisfy a label policy
//!
//! A CI helper that merges every open pull request carrying two
//! configured labels (a "ready" label and an "approved" label) whose
//! mergeability flag is set and whose check runs all pass. Designed to
//! run inside a GitHub Actions job but usable as a plain CLI.

pub mod error;
pub mod platform;
pub mod policy;
pub mod types;
