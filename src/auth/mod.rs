//! Authentication for the hosting service
//!
//! The token is read once at start-up and passed explicitly to every
//! component that talks to the network.

mod github;

pub use github::{get_github_auth, test_github_auth, token_from_env, GitHubAuthConfig, TOKEN_ENV};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from environment variable
    EnvVar,
}
