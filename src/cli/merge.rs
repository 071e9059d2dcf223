//! Merge command - merge every labelled pull request

use crate::cli::progress::CliProgress;
use crate::cli::style::{check, cross, Stylize};
use anstream::println;
use merge_me::auth::get_github_auth;
use merge_me::error::Result;
use merge_me::git::{GitWorkspace, ProcessRunner};
use merge_me::merge::{
    list_candidates, process_open_prs, MarkerFileHook, MergeContext, MergeProgress,
};
use merge_me::platform::{create_platform_service, parse_repo_info, parse_repo_slug};
use merge_me::types::{MergeSettings, PlatformConfig};
use std::path::Path;

/// Run the merge command
pub async fn run_merge(
    path: &Path,
    repo: Option<&str>,
    settings: &MergeSettings,
    dry_run: bool,
) -> Result<()> {
    // Token first: a missing token must stop the run before anything else
    let auth = get_github_auth()?;

    let runner = ProcessRunner::new(path);
    let git = GitWorkspace::new(&runner);

    let platform_config = resolve_repo(&git, repo, &settings.remote).await?;
    let platform = create_platform_service(&platform_config, &auth)?;
    let progress = CliProgress;

    println!(
        "Looking for pull requests labelled {} in {}",
        settings.trigger_label.accent(),
        format!("{}/{}", platform_config.owner, platform_config.repo).accent()
    );

    if dry_run {
        let candidates = list_candidates(platform.as_ref(), settings).await?;
        if candidates.is_empty() {
            progress.on_message("No mergeable pull requests").await;
        } else {
            progress.on_candidates(&candidates).await;
        }
        println!("{}", "Dry run - no changes made".muted());
        return Ok(());
    }

    let hook = MarkerFileHook::default();
    let ctx = MergeContext {
        git: &git,
        platform: platform.as_ref(),
        hook: &hook,
        progress: &progress,
        settings,
    };

    let report = process_open_prs(&ctx).await?;
    if report.is_empty() {
        return Ok(());
    }

    println!();
    println!(
        "{} {} merged, {} {} failed",
        check(),
        report.merged.len().to_string().accent(),
        cross().for_stdout(),
        report.failed.len().to_string().accent()
    );

    Ok(())
}

/// Use `--repo` when given, otherwise the repository behind the remote
///
/// Without `--repo` this runs the read-only `git remote get-url`, also on
/// dry runs.
async fn resolve_repo(
    git: &GitWorkspace<'_>,
    repo: Option<&str>,
    remote: &str,
) -> Result<PlatformConfig> {
    match repo {
        Some(slug) => parse_repo_slug(slug),
        None => {
            let url = git.remote_url(remote).await?;
            parse_repo_info(&url)
        }
    }
}
