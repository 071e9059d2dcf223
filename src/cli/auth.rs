//! Auth command - test and explain authentication

use anstream::println;
use merge_me::auth::{get_github_auth, test_github_auth, TOKEN_ENV};
use merge_me::error::Result;
use std::env;

use crate::cli::style::{check, Stylize};

/// Run the auth test command
pub async fn run_auth_test() -> Result<()> {
    println!("Testing GitHub authentication...");
    let config = get_github_auth()?;
    let host = env::var("GH_HOST").ok();
    let username = test_github_auth(&config, host.as_deref()).await?;
    println!("{} Authenticated as: {}", check(), username.accent());
    println!("Token source: {:?}", config.source);
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "GitHub Authentication Setup".emphasis());
    println!("===========================");
    println!();
    println!("Set {TOKEN_ENV} to a token that can read pull requests,");
    println!("comment on them, edit labels and push to the trunk branch.");
    println!();
    println!("In GitHub Actions:");
    println!("  env:");
    println!("    {TOKEN_ENV}: ${{{{ secrets.GITHUB_TOKEN }}}}");
    println!();
    println!("For GitHub Enterprise:");
    println!("  Set GH_HOST to your instance hostname");
}
