//! Version-control plumbing
//!
//! Every git operation is an external process. Commands go through a
//! [`CommandRunner`] so the merge sequence can be driven against a scripted
//! runner in tests.

mod command;
mod workspace;

pub use command::{maybe_quote, quote_command, CommandOutput, CommandRunner, ProcessRunner};
pub use workspace::GitWorkspace;
