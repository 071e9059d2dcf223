//! Test data factories

#![allow(dead_code)]

use merge_me::types::{HeadRepo, Label, PullRequestHead, PullRequestSummary};

/// API URL for a test pull request
pub fn pr_url(number: u64) -> String {
    format!("https://api.github.com/repos/octo/demo/pulls/{number}")
}

/// Issue API URL backing a test pull request
pub fn issue_url(number: u64) -> String {
    format!("https://api.github.com/repos/octo/demo/issues/{number}")
}

/// Head commit of a test pull request
pub fn pr_sha(number: u64) -> String {
    format!("{number:0>4}cafe")
}

/// Open pull request with the given labels
pub fn make_pr(number: u64, labels: &[&str]) -> PullRequestSummary {
    PullRequestSummary {
        url: pr_url(number),
        issue_url: Some(issue_url(number)),
        labels: labels
            .iter()
            .map(|name| Label {
                name: (*name).to_string(),
            })
            .collect(),
        head: PullRequestHead {
            sha: pr_sha(number),
            repo: Some(HeadRepo {
                clone_url: format!("https://github.com/contrib/demo-{number}.git"),
            }),
        },
    }
}

/// Open pull request carrying the default trigger label
pub fn make_labelled_pr(number: u64) -> PullRequestSummary {
    make_pr(number, &["merge-me"])
}
