//! Hosting-service operations
//!
//! Provides the narrow set of pull request operations the merge loop needs.

mod detection;
mod factory;
mod github;

pub use detection::{
    detect_platform, detect_platform_with_host, parse_repo_info, parse_repo_info_with_host,
    parse_repo_slug,
};
pub use factory::create_platform_service;
pub use github::{GitHubService, REQUEST_TIMEOUT_SECS};

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequestSummary};
use async_trait::async_trait;

/// Platform service trait for pull request operations
///
/// Reporting calls are addressed by the issue API URL from the listing
/// (`issue_url`, falling back to the pull request URL), so implementations
/// never need to rebuild paths.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List open pull requests (first page only)
    async fn list_open_prs(&self) -> Result<Vec<PullRequestSummary>>;

    /// Post a comment on a pull request
    async fn add_comment(&self, target: &str, body: &str) -> Result<()>;

    /// Remove a label from a pull request
    async fn remove_label(&self, target: &str, label: &str) -> Result<()>;

    /// Close a pull request
    async fn close_pr(&self, target: &str) -> Result<()>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
