//! GitHub authentication

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use std::env;

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// GitHub authentication configuration
#[derive(Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

impl std::fmt::Debug for GitHubAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuthConfig")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Get GitHub authentication from `GITHUB_TOKEN`
pub fn get_github_auth() -> Result<GitHubAuthConfig> {
    token_from_env(env::var(TOKEN_ENV).ok())
}

/// Build an auth config from a raw environment value
///
/// Unset and empty values are both rejected.
pub fn token_from_env(value: Option<String>) -> Result<GitHubAuthConfig> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
        }),
        _ => Err(Error::Auth(format!("{TOKEN_ENV} is not set"))),
    }
}

/// Test GitHub authentication, returning the authenticated login
pub async fn test_github_auth(config: &GitHubAuthConfig, host: Option<&str>) -> Result<String> {
    let mut builder = octocrab::Octocrab::builder().personal_token(config.token.clone());

    if let Some(h) = host {
        builder = builder
            .base_uri(format!("https://{h}/api/v3"))
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
    }

    let octocrab = builder
        .build()
        .map_err(|e| Error::GitHubApi(e.to_string()))?;

    let user = octocrab
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?;

    Ok(user.login)
}
