//! Error types for merge-me

use thiserror::Error;

/// Errors surfaced by the merge bot
#[derive(Debug, Error)]
pub enum Error {
    /// No usable token was found
    #[error("authentication error: {0}")]
    Auth(String),

    /// The hosting service answered with a non-success status
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Transport-level failure talking to the hosting service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body could not be decoded
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// An external command exited unsuccessfully
    #[error("command failed: {command} ({status})")]
    Command {
        /// The command line, rendered with quoting
        command: String,
        /// Exit status description
        status: String,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },

    /// Local I/O failure (spawning processes, writing files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// The remote URL does not point at a supported host
    #[error("no supported remote found (expected a GitHub remote)")]
    NoSupportedRemotes,

    /// Generic platform failure
    #[error("platform error: {0}")]
    Platform(String),
}

impl Error {
    /// Process exit status for an error that escaped to the entry point
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Auth(_) => 1,
            _ => 2,
        }
    }
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
