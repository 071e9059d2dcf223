//! Repository detection from remote URLs and `owner/repo` slugs

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use regex::Regex;
use std::env;
use std::sync::LazyLock;

static RE_SSH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ssh://)?git@[^:/]+[:/](.+?)(?:\.git)?/?$").expect("valid regex")
});

static RE_HTTPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/]+/(.+?)(?:\.git)?/?$").expect("valid regex"));

/// Whether a remote URL points at GitHub (or the `GH_HOST` Enterprise host)
pub fn detect_platform(url: &str) -> bool {
    detect_platform_with_host(url, env::var("GH_HOST").ok().as_deref())
}

/// Whether a remote URL points at GitHub or the given Enterprise host
pub fn detect_platform_with_host(url: &str, gh_host: Option<&str>) -> bool {
    extract_hostname(url).is_some_and(|hostname| {
        hostname == "github.com"
            || hostname.ends_with(".github.com")
            || gh_host.is_some_and(|h| !h.is_empty() && hostname == h)
    })
}

/// Parse repository info (owner/repo) from a remote URL
pub fn parse_repo_info(url: &str) -> Result<PlatformConfig> {
    parse_repo_info_with_host(url, env::var("GH_HOST").ok().as_deref())
}

/// Parse repository info, accepting `gh_host` as an Enterprise host
pub fn parse_repo_info_with_host(url: &str, gh_host: Option<&str>) -> Result<PlatformConfig> {
    if !detect_platform_with_host(url, gh_host) {
        return Err(Error::NoSupportedRemotes);
    }
    let hostname = extract_hostname(url);

    // SSH format: git@host:owner/repo.git
    // HTTPS format: https://host/owner/repo.git
    let path = RE_SSH
        .captures(url)
        .or_else(|| RE_HTTPS.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;

    let mut config = parse_repo_slug(path)?;
    config.host = hostname.filter(|h| h != "github.com");
    Ok(config)
}

/// Parse an `owner/repo` slug
pub fn parse_repo_slug(slug: &str) -> Result<PlatformConfig> {
    match slug.split('/').collect::<Vec<_>>().as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => Ok(PlatformConfig {
            owner: (*owner).to_string(),
            repo: (*repo).to_string(),
            host: None,
        }),
        _ => Err(Error::Parse(format!(
            "invalid repository `{slug}`, expected OWNER/REPO"
        ))),
    }
}

fn extract_hostname(url: &str) -> Option<String> {
    // SSH format
    if let Some(rest) = url.strip_prefix("git@") {
        return rest.split(':').next().map(ToString::to_string);
    }

    // HTTPS and ssh:// format
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_github_https() {
        assert!(detect_platform("https://github.com/owner/repo.git"));
    }

    #[test]
    fn test_detect_github_ssh() {
        assert!(detect_platform("git@github.com:owner/repo.git"));
    }

    #[test]
    fn test_detect_gitlab_rejected() {
        assert!(!detect_platform_with_host("https://gitlab.com/owner/repo.git", None));
        assert!(matches!(
            parse_repo_info_with_host("https://gitlab.com/owner/repo.git", None),
            Err(Error::NoSupportedRemotes)
        ));
    }

    #[test]
    fn test_detect_enterprise_host() {
        let url = "https://ghe.corp/octo/demo.git";
        assert!(!detect_platform_with_host(url, None));
        assert!(!detect_platform_with_host(url, Some("")));
        assert!(!detect_platform_with_host(url, Some("other.corp")));
        assert!(detect_platform_with_host(url, Some("ghe.corp")));
        assert!(detect_platform_with_host("git@ghe.corp:octo/demo.git", Some("ghe.corp")));
    }

    #[test]
    fn test_parse_enterprise_host() {
        let config =
            parse_repo_info_with_host("https://ghe.corp/octo/demo.git", Some("ghe.corp")).unwrap();
        assert_eq!(config.owner, "octo");
        assert_eq!(config.repo, "demo");
        assert_eq!(config.host.as_deref(), Some("ghe.corp"));
        assert_eq!(config.api_base(), "https://ghe.corp/api/v3");

        assert!(matches!(
            parse_repo_info_with_host("https://ghe.corp/octo/demo.git", None),
            Err(Error::NoSupportedRemotes)
        ));
    }

    #[test]
    fn test_parse_github_https() {
        let config = parse_repo_info("https://github.com/mostynb/github-action-test.git").unwrap();
        assert_eq!(config.owner, "mostynb");
        assert_eq!(config.repo, "github-action-test");
        assert!(config.host.is_none());
    }

    #[test]
    fn test_parse_github_ssh() {
        let config = parse_repo_info("git@github.com:owner/repo.git").unwrap();
        assert_eq!(config.owner, "owner");
        assert_eq!(config.repo, "repo");
    }

    #[test]
    fn test_parse_without_git_suffix() {
        let config = parse_repo_info("https://github.com/owner/repo").unwrap();
        assert_eq!(config.repo, "repo");
    }

    #[test]
    fn test_parse_slug() {
        let config = parse_repo_slug("octo/demo").unwrap();
        assert_eq!(config.owner, "octo");
        assert_eq!(config.repo, "demo");
    }

    #[test]
    fn test_parse_slug_invalid() {
        assert!(parse_repo_slug("octo").is_err());
        assert!(parse_repo_slug("octo/").is_err());
        assert!(parse_repo_slug("a/b/c").is_err());
    }
}
