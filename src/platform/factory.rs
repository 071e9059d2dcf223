//! Platform service factory

use crate::auth::GitHubAuthConfig;
use crate::error::Result;
use crate::platform::{GitHubService, PlatformService};
use crate::types::PlatformConfig;

/// Create a platform service from configuration and an explicit token
pub fn create_platform_service(
    config: &PlatformConfig,
    auth: &GitHubAuthConfig,
) -> Result<Box<dyn PlatformService>> {
    Ok(Box::new(GitHubService::new(
        &auth.token,
        config.owner.clone(),
        config.repo.clone(),
        config.host.clone(),
    )?))
}
