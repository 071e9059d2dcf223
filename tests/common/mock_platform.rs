//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use merge_me::error::{Error, Result};
use merge_me::platform::PlatformService;
use merge_me::types::{PlatformConfig, PullRequestSummary};
use std::sync::Mutex;

/// One recorded call against the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    ListOpenPrs,
    AddComment { url: String, body: String },
    RemoveLabel { url: String, label: String },
    ClosePr { url: String },
}

/// Simple mock platform service for testing
///
/// Records every call in order so tests can check both counts and sequence.
/// Each operation can be made to fail.
pub struct MockPlatformService {
    config: PlatformConfig,
    open_prs: Mutex<Vec<PullRequestSummary>>,
    calls: Mutex<Vec<PlatformCall>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    error_on_comment: Mutex<Option<String>>,
    error_on_remove_label: Mutex<Option<String>>,
    error_on_close: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a mock returning the given listing
    pub fn with_prs(open_prs: Vec<PullRequestSummary>) -> Self {
        Self {
            config: PlatformConfig {
                owner: "octo".to_string(),
                repo: "demo".to_string(),
                host: None,
            },
            open_prs: Mutex::new(open_prs),
            calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            error_on_comment: Mutex::new(None),
            error_on_remove_label: Mutex::new(None),
            error_on_close: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_comment(&self, msg: &str) {
        *self.error_on_comment.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_remove_label(&self, msg: &str) {
        *self.error_on_remove_label.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_close(&self, msg: &str) {
        *self.error_on_close.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// All calls in order
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// All calls except the listing
    pub fn reporting_calls(&self) -> Vec<PlatformCall> {
        self.calls()
            .into_iter()
            .filter(|c| *c != PlatformCall::ListOpenPrs)
            .collect()
    }

    /// Bodies of all posted comments
    pub fn comments(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                PlatformCall::AddComment { body, .. } => Some(body),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn injected(slot: &Mutex<Option<String>>) -> Result<()> {
        match slot.lock().unwrap().as_ref() {
            Some(msg) => Err(Error::Platform(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_open_prs(&self) -> Result<Vec<PullRequestSummary>> {
        self.record(PlatformCall::ListOpenPrs);
        Self::injected(&self.error_on_list)?;
        Ok(self.open_prs.lock().unwrap().clone())
    }

    async fn add_comment(&self, pr_api_url: &str, body: &str) -> Result<()> {
        self.record(PlatformCall::AddComment {
            url: pr_api_url.to_string(),
            body: body.to_string(),
        });
        Self::injected(&self.error_on_comment)
    }

    async fn remove_label(&self, pr_api_url: &str, label: &str) -> Result<()> {
        self.record(PlatformCall::RemoveLabel {
            url: pr_api_url.to_string(),
            label: label.to_string(),
        });
        Self::injected(&self.error_on_remove_label)
    }

    async fn close_pr(&self, pr_api_url: &str) -> Result<()> {
        self.record(PlatformCall::ClosePr {
            url: pr_api_url.to_string(),
        });
        Self::injected(&self.error_on_close)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
