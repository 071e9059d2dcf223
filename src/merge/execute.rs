//! Merge execution - effectful operations
//!
//! Each candidate runs through a fixed sequence of git steps. A failing step
//! ends that candidate only; the loop moves on to the next one. Once the
//! baseline commit is known, every failure resets trunk back to it so the
//! next candidate starts from a clean, known state.

use crate::error::{Error, Result};
use crate::git::{quote_command, GitWorkspace};
use crate::merge::{select_candidates, MergeProgress, MergeStep, PostMergeHook};
use crate::platform::PlatformService;
use crate::types::{MergeCandidate, MergeSettings};
use tracing::{error, info, warn};

/// Why a candidate was not merged
#[derive(Debug)]
pub struct CandidateFailure {
    /// Step that failed
    pub step: MergeStep,
    /// Underlying error
    pub error: Error,
}

impl CandidateFailure {
    const fn new(step: MergeStep, error: Error) -> Self {
        Self { step, error }
    }
}

impl std::fmt::Display for CandidateFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.step, self.error)
    }
}

/// Outcome of one run over all candidates
#[derive(Debug, Default)]
pub struct RunReport {
    /// Candidates merged, pushed and closed
    pub merged: Vec<MergeCandidate>,
    /// Candidates that stopped at some step
    pub failed: Vec<(MergeCandidate, CandidateFailure)>,
}

impl RunReport {
    /// Whether there was nothing to do
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty() && self.failed.is_empty()
    }
}

/// Everything a merge attempt needs
pub struct MergeContext<'a> {
    /// Working tree to merge in
    pub git: &'a GitWorkspace<'a>,
    /// Hosting service to report to
    pub platform: &'a dyn PlatformService,
    /// Step run between merge and amend
    pub hook: &'a dyn PostMergeHook,
    /// Progress sink
    pub progress: &'a dyn MergeProgress,
    /// Label, trunk and remote
    pub settings: &'a MergeSettings,
}

/// Comment posted when `git merge` fails
pub fn merge_failure_comment(sha: &str, error: &Error) -> String {
    match error {
        Error::Command {
            command,
            stdout,
            stderr,
            ..
        } => format!("Failed to merge: {command}\n{stdout}\n{stderr}"),
        other => format!(
            "Failed to merge: {}\n{other}",
            quote_command(&["git", "merge", sha])
        ),
    }
}

/// Comment posted after a successful merge
pub fn success_comment(trunk: &str) -> String {
    format!("Merged into {trunk}.")
}

/// Fetch open pull requests and keep those carrying the trigger label
///
/// Makes the single listing call and nothing else; used on its own for dry
/// runs.
pub async fn list_candidates(
    platform: &dyn PlatformService,
    settings: &MergeSettings,
) -> Result<Vec<MergeCandidate>> {
    let prs = platform.list_open_prs().await?;
    Ok(select_candidates(&prs, &settings.trigger_label))
}

/// Fetch open pull requests, filter them and merge every candidate
///
/// Listing and decode failures are returned; per-candidate failures end up
/// in the [`RunReport`].
pub async fn process_open_prs(ctx: &MergeContext<'_>) -> Result<RunReport> {
    let candidates = list_candidates(ctx.platform, ctx.settings).await?;

    if candidates.is_empty() {
        info!("No mergeable issues.");
        ctx.progress.on_message("No mergeable pull requests").await;
        return Ok(RunReport::default());
    }

    ctx.progress.on_candidates(&candidates).await;
    Ok(run_merges(ctx, candidates).await)
}

/// Merge candidates one at a time, in order
pub async fn run_merges(ctx: &MergeContext<'_>, candidates: Vec<MergeCandidate>) -> RunReport {
    let mut report = RunReport::default();

    for candidate in candidates {
        ctx.progress.on_candidate_started(&candidate).await;

        match merge_candidate(ctx, &candidate).await {
            Ok(()) => {
                ctx.progress.on_merged(&candidate).await;
                report.merged.push(candidate);
            }
            Err(failure) => {
                error!(pr = %candidate.pr_api_url, "{failure}");
                ctx.progress.on_failed(&candidate, &failure).await;
                report.failed.push((candidate, failure));
            }
        }
    }

    report
}

/// Run the full merge sequence for one candidate
pub async fn merge_candidate(
    ctx: &MergeContext<'_>,
    candidate: &MergeCandidate,
) -> std::result::Result<(), CandidateFailure> {
    info!(
        pr = %candidate.pr_api_url,
        clone_url = %candidate.clone_url,
        sha = %candidate.commit_sha,
        "MERGE"
    );
    let git = ctx.git;
    let settings = ctx.settings;
    let sha = candidate.commit_sha.as_str();

    // No rollback before the baseline is known
    step(ctx, candidate, MergeStep::Fetch, git.fetch(&candidate.clone_url, sha)).await?;
    step(ctx, candidate, MergeStep::CheckoutTrunk, git.checkout(&settings.trunk)).await?;
    let baseline = step(ctx, candidate, MergeStep::RecordBaseline, git.rev_parse_head()).await?;

    if let Err(failure) = step(ctx, candidate, MergeStep::Clean, git.clean()).await {
        return Err(rollback(git, &baseline, failure).await);
    }

    if let Err(failure) = step(ctx, candidate, MergeStep::Merge, git.merge(sha)).await {
        let comment = merge_failure_comment(sha, &failure.error);
        report(
            "add comment",
            ctx.platform.add_comment(&candidate.report_url, &comment).await,
        );
        report(
            "remove label",
            ctx.platform
                .remove_label(&candidate.report_url, &settings.trigger_label)
                .await,
        );
        best_effort("git merge --abort", git.merge_abort().await);
        return Err(rollback(git, &baseline, failure).await);
    }

    if let Err(failure) = step(ctx, candidate, MergeStep::PostMergeHook, ctx.hook.run(git)).await {
        return Err(rollback(git, &baseline, failure).await);
    }

    if let Err(failure) = step(ctx, candidate, MergeStep::Amend, git.commit_amend()).await {
        return Err(rollback(git, &baseline, failure).await);
    }

    if let Err(failure) = step(
        ctx,
        candidate,
        MergeStep::Push,
        git.push(&settings.remote, &settings.trunk),
    )
    .await
    {
        return Err(rollback(git, &baseline, failure).await);
    }

    ctx.progress.on_step(candidate, MergeStep::Report).await;
    report_success(ctx, candidate).await;

    Ok(())
}

/// Announce a step, await it and tag any error with the step
async fn step<T>(
    ctx: &MergeContext<'_>,
    candidate: &MergeCandidate,
    which: MergeStep,
    fut: impl std::future::Future<Output = Result<T>>,
) -> std::result::Result<T, CandidateFailure> {
    ctx.progress.on_step(candidate, which).await;
    fut.await.map_err(|e| {
        error!("Failed to {which}: {e}");
        CandidateFailure::new(which, e)
    })
}

/// Reset trunk to the baseline, keeping the original failure
async fn rollback(
    git: &GitWorkspace<'_>,
    baseline: &str,
    failure: CandidateFailure,
) -> CandidateFailure {
    best_effort("git reset --hard", git.reset_hard(baseline).await);
    failure
}

/// Remove the label, comment and close; failures are logged only
async fn report_success(ctx: &MergeContext<'_>, candidate: &MergeCandidate) {
    let url = &candidate.report_url;

    report(
        "remove label",
        ctx.platform
            .remove_label(url, &ctx.settings.trigger_label)
            .await,
    );
    report(
        "add comment",
        ctx.platform
            .add_comment(url, &success_comment(&ctx.settings.trunk))
            .await,
    );
    report("close pull request", ctx.platform.close_pr(url).await);
}

fn best_effort(what: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!("cleanup `{what}` failed, continuing: {e}");
    }
}

fn report(what: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!("failed to {what}, continuing: {e}");
    }
}
