//! CLI commands
//!
//! Command implementations for the `merge-me` binary.

mod auth;
mod merge;
mod progress;
mod style;

pub use auth::{run_auth_setup, run_auth_test};
pub use merge::run_merge;
