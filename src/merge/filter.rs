//! Label filter: open pull requests -> merge candidates

use crate::types::{MergeCandidate, PullRequestSummary};

/// Select pull requests carrying the trigger label
///
/// One candidate is emitted per matching label, so a label listed twice
/// yields two candidates. Matching is exact and case-sensitive.
pub fn select_candidates(prs: &[PullRequestSummary], trigger_label: &str) -> Vec<MergeCandidate> {
    prs.iter()
        .flat_map(|pr| {
            pr.labels
                .iter()
                .filter(move |label| label.name == trigger_label)
                .map(move |_| MergeCandidate {
                    pr_api_url: pr.url.clone(),
                    report_url: pr.report_url().to_string(),
                    clone_url: pr.clone_url().to_string(),
                    commit_sha: pr.head.sha.clone(),
                })
        })
        .collect()
}
