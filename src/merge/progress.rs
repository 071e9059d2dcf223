//! Progress callback trait for interface-agnostic updates
//!
//! The merge loop reports what it is doing through this trait so the CLI can
//! render it while tests stay silent.

use crate::merge::CandidateFailure;
use crate::types::MergeCandidate;
use async_trait::async_trait;
use std::fmt;

/// Step of the per-candidate merge sequence, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStep {
    /// Fetch the candidate's head commit
    Fetch,
    /// Check out the trunk branch
    CheckoutTrunk,
    /// Record the trunk commit used as rollback target
    RecordBaseline,
    /// Remove untracked and ignored files
    Clean,
    /// Merge the fetched commit into trunk
    Merge,
    /// Run the post-merge hook
    PostMergeHook,
    /// Fold hook output into the merge commit
    Amend,
    /// Push trunk to the remote
    Push,
    /// Report success on the pull request
    Report,
}

impl fmt::Display for MergeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Fetch => "fetch",
            Self::CheckoutTrunk => "checkout trunk",
            Self::RecordBaseline => "record baseline",
            Self::Clean => "clean",
            Self::Merge => "merge",
            Self::PostMergeHook => "post-merge hook",
            Self::Amend => "amend",
            Self::Push => "push",
            Self::Report => "report",
        };
        write!(f, "{s}")
    }
}

/// Progress callback trait
#[async_trait]
pub trait MergeProgress: Send + Sync {
    /// Called once with the filtered work list
    async fn on_candidates(&self, candidates: &[MergeCandidate]);

    /// Called when work on a candidate begins
    async fn on_candidate_started(&self, candidate: &MergeCandidate);

    /// Called before each step of the sequence
    async fn on_step(&self, candidate: &MergeCandidate, step: MergeStep);

    /// Called when a candidate was merged and pushed
    async fn on_merged(&self, candidate: &MergeCandidate);

    /// Called when a candidate's sequence aborted
    async fn on_failed(&self, candidate: &MergeCandidate, failure: &CandidateFailure);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl MergeProgress for NoopProgress {
    async fn on_candidates(&self, _candidates: &[MergeCandidate]) {}
    async fn on_candidate_started(&self, _candidate: &MergeCandidate) {}
    async fn on_step(&self, _candidate: &MergeCandidate, _step: MergeStep) {}
    async fn on_merged(&self, _candidate: &MergeCandidate) {}
    async fn on_failed(&self, _candidate: &MergeCandidate, _failure: &CandidateFailure) {}
    async fn on_message(&self, _message: &str) {}
}
