//! Error types for label-merge

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by label-merge
///
/// Configuration errors abort before any API call. Transport and API
/// errors abort the whole run with the underlying message intact; there
/// is no per-pull-request error isolation and no retry anywhere.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration input
    #[error("configuration error: {0}")]
    Config(String),

    /// GitHub API error (raw HTTP requests, client construction)
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Generic platform collaborator failure
    #[error("platform error: {0}")]
    Platform(String),

    /// Error from the octocrab client
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// I/O error (process-level output file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
