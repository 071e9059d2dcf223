//! Core types for merge-me

use serde::{Deserialize, Serialize};

/// Default trigger label
pub const DEFAULT_TRIGGER_LABEL: &str = "merge-me";

/// Default trunk branch
pub const DEFAULT_TRUNK: &str = "master";

/// Default push remote
pub const DEFAULT_REMOTE: &str = "origin";

/// A label attached to a pull request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// Label name
    pub name: String,
}

/// Repository a pull request head lives in
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadRepo {
    /// URL the head can be fetched from
    #[serde(default)]
    pub clone_url: String,
}

/// Head of a pull request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestHead {
    /// Head commit hash
    pub sha: String,
    /// Source repository; null when the fork has been deleted
    #[serde(default)]
    pub repo: Option<HeadRepo>,
}

/// An open pull request as returned by the listing endpoint
///
/// Only the fields the bot consumes are decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// API URL of the pull request resource
    pub url: String,
    /// API URL of the issue backing the pull request
    #[serde(default)]
    pub issue_url: Option<String>,
    /// Labels on the pull request
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Head commit and source repository
    pub head: PullRequestHead,
}

impl PullRequestSummary {
    /// Clone URL of the source repository, empty if unknown
    pub fn clone_url(&self) -> &str {
        self.head
            .repo
            .as_ref()
            .map_or("", |repo| repo.clone_url.as_str())
    }

    /// URL comments, labels and state changes are sent to
    ///
    /// Comments and labels live on the issue, not the pull request resource;
    /// falls back to the pull request URL when the listing omits `issue_url`.
    pub fn report_url(&self) -> &str {
        self.issue_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.url)
    }
}

/// A pull request selected for merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCandidate {
    /// API URL of the pull request
    pub pr_api_url: String,
    /// API URL outcome reports are addressed to
    pub report_url: String,
    /// Where to fetch the head commit from
    pub clone_url: String,
    /// Head commit hash to merge
    pub commit_sha: String,
}

impl MergeCandidate {
    /// Trailing path segment of the API URL (the PR number on GitHub)
    pub fn display_id(&self) -> &str {
        self.pr_api_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.pr_api_url)
    }
}

/// Repository addressing for the hosting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

impl PlatformConfig {
    /// Base URL of the REST API for this host
    pub fn api_base(&self) -> String {
        self.host.as_ref().map_or_else(
            || "https://api.github.com".to_string(),
            |h| format!("https://{h}/api/v3"),
        )
    }
}

/// Knobs for one merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSettings {
    /// Label that marks a pull request as ready to merge
    pub trigger_label: String,
    /// Branch candidates are merged into
    pub trunk: String,
    /// Remote the trunk is pushed to
    pub remote: String,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            trigger_label: DEFAULT_TRIGGER_LABEL.to_string(),
            trunk: DEFAULT_TRUNK.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}
