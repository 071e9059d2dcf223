//! Merge engine
//!
//! 1. Filter - reduce the open pull requests to labelled candidates (pure)
//! 2. Execute - drive the git sequence for each candidate and report back

mod execute;
mod filter;
mod hook;
mod progress;

pub use execute::{
    list_candidates, merge_candidate, merge_failure_comment, process_open_prs, run_merges, success_comment,
    CandidateFailure, MergeContext, RunReport,
};
pub use filter::select_candidates;
pub use hook::{MarkerFileHook, PostMergeHook, DEFAULT_MARKER_FILE};
pub use progress::{MergeProgress, MergeStep, NoopProgress};
