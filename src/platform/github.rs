//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PlatformConfig, PullRequestSummary};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, info};

/// Timeout applied to every request, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("merge-me/", env!("CARGO_PKG_VERSION"));

/// GitHub service using reqwest
pub struct GitHubService {
    client: Client,
    token: String,
    api_base: String,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let config = PlatformConfig { owner, repo, host };
        let api_base = config.api_base();
        Self::with_api_base(token, config, api_base)
    }

    /// Create a service against an explicit API base URL
    pub fn with_api_base(
        token: &str,
        config: PlatformConfig,
        api_base: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            token: token.to_string(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            config,
        })
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
    }

    fn pulls_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/pulls",
            self.api_base, self.config.owner, self.config.repo
        )
    }
}

/// Turn a non-2xx response into an error carrying status and body
async fn check_status(response: Response, method: &Method, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!(%status, %body, "request failed");
    Err(Error::GitHubApi(format!("{method} {url} returned {status}")))
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_open_prs(&self) -> Result<Vec<PullRequestSummary>> {
        let url = self.pulls_url();
        info!("GET: {url}");

        let response = self.request(Method::GET, &url).send().await?;
        let body = check_status(response, &Method::GET, &url).await?.text().await?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn add_comment(&self, target: &str, body: &str) -> Result<()> {
        let url = format!("{target}/comments");
        info!("POST: {url}");

        let response = self
            .request(Method::POST, &url)
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await?;
        check_status(response, &Method::POST, &url).await?;

        Ok(())
    }

    async fn remove_label(&self, target: &str, label: &str) -> Result<()> {
        let url = format!("{target}/labels/{}", urlencoding::encode(label));
        info!("DELETE: {url}");

        let response = self.request(Method::DELETE, &url).send().await?;
        check_status(response, &Method::DELETE, &url).await?;

        Ok(())
    }

    async fn close_pr(&self, target: &str) -> Result<()> {
        info!("PATCH: {target}");

        let response = self
            .request(Method::PATCH, target)
            .json(&serde_json::json!({ "state": "closed" }))
            .send()
            .await?;
        check_status(response, &Method::PATCH, target).await?;

        Ok(())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
