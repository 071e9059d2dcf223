//! CLI progress callback with styled output

use crate::cli::style::{arrow, check, cross, hyperlink_url, Stream, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use merge_me::merge::{CandidateFailure, MergeProgress, MergeStep};
use merge_me::types::MergeCandidate;

/// CLI progress callback printing to stdout/stderr
pub struct CliProgress;

#[async_trait]
impl MergeProgress for CliProgress {
    async fn on_candidates(&self, candidates: &[MergeCandidate]) {
        println!(
            "Found {} mergeable pull request(s):",
            candidates.len().to_string().accent()
        );
        for candidate in candidates {
            println!(
                "  {} #{} {} {}",
                arrow(),
                candidate.display_id().emphasis(),
                short_sha(&candidate.commit_sha).muted(),
                hyperlink_url(Stream::Stdout, &candidate.pr_api_url)
            );
        }
    }

    async fn on_candidate_started(&self, candidate: &MergeCandidate) {
        println!();
        println!(
            "{} #{} ({})",
            "Merging".emphasis(),
            candidate.display_id().accent(),
            short_sha(&candidate.commit_sha).muted()
        );
    }

    async fn on_step(&self, _candidate: &MergeCandidate, step: MergeStep) {
        println!("  {}...", step.to_string().muted());
    }

    async fn on_merged(&self, candidate: &MergeCandidate) {
        println!(
            "{} Merged #{}",
            check(),
            candidate.display_id().emphasis()
        );
    }

    async fn on_failed(&self, candidate: &MergeCandidate, failure: &CandidateFailure) {
        eprintln!(
            "{} #{}: {}",
            cross(),
            candidate.display_id().accent().for_stderr(),
            failure.to_string().error()
        );
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}

fn short_sha(sha: &str) -> &str {
    sha.get(..8).unwrap_or(sha)
}
