//! merge-me - merge labelled pull requests into trunk
//!
//! Scans a GitHub repository for open pull requests carrying a trigger
//! label, merges each one into the trunk branch with plain git commands,
//! and reports the outcome back on the pull request.

pub mod auth;
pub mod error;
pub mod git;
pub mod merge;
pub mod platform;
pub mod types;
