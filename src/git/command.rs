//! Process execution and command rendering

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::info;

/// Quote an argument for display if it contains a space
pub fn maybe_quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("{arg:?}")
    } else {
        arg.to_string()
    }
}

/// Render a command line for logs and comments
///
/// Arguments containing a space are shown as quoted tokens, everything else
/// verbatim: `["git", "commit", "-m", "fix bug"]` renders as
/// `git commit -m "fix bug"`.
pub fn quote_command<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|a| maybe_quote(a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Captured result of one external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero
    pub success: bool,
    /// Exit status description (e.g. `exit status: 1`)
    pub status: String,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutput {
    /// A successful result with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed result with the given stderr
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            status: "exit status: 1".to_string(),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs external commands
///
/// Implementations return `Ok` for any process that ran, whatever its exit
/// status; `Err` means the process could not be started at all.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `args[0]` with the remaining arguments
    async fn run(&self, args: &[&str]) -> Result<CommandOutput>;

    /// Directory commands run in
    fn workdir(&self) -> &Path;
}

/// Runs commands as child processes in a fixed directory
///
/// No timeout is applied; a hung command blocks the run.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    workdir: PathBuf,
}

impl ProcessRunner {
    /// Create a runner for the given working directory
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        info!("CMD: {}", quote_command(args));

        let Some((program, rest)) = args.split_first() else {
            return Ok(CommandOutput::failed("empty command"));
        };

        let output = Command::new(program)
            .args(rest)
            .current_dir(&self.workdir)
            .output()
            .await?;

        let result = CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.stdout.is_empty() {
            info!("{}", result.stdout.trim_end());
        }
        if !result.stderr.is_empty() {
            info!("{}", result.stderr.trim_end());
        }

        Ok(result)
    }

    fn workdir(&self) -> &Path {
        &self.workdir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_argument_with_space() {
        assert_eq!(
            quote_command(&["git", "commit", "-m", "fix bug"]),
            r#"git commit -m "fix bug""#
        );
    }

    #[test]
    fn test_no_quote_without_space() {
        assert_eq!(
            quote_command(&["git", "merge", "abc123"]),
            "git merge abc123"
        );
    }

    #[test]
    fn test_maybe_quote_escapes_embedded_quotes() {
        assert_eq!(maybe_quote(r#"say "hi" now"#), r#""say \"hi\" now""#);
        assert_eq!(maybe_quote("plain"), "plain");
    }

    #[test]
    fn test_quote_owned_strings() {
        let args = vec!["git".to_string(), "a b".to_string()];
        assert_eq!(quote_command(&args), r#"git "a b""#);
    }

    #[tokio::test]
    async fn test_process_runner_captures_output() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ProcessRunner::new(dir.path());

        let output = runner.run(&["sh", "-c", "echo hello"]).await.unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "hello\n");
    }

    #[tokio::test]
    async fn test_process_runner_reports_failure_status() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ProcessRunner::new(dir.path());

        let output = runner
            .run(&["sh", "-c", "echo oops >&2; exit 3"])
            .await
            .unwrap();
        assert!(!output.success);
        assert_eq!(output.stderr, "oops\n");
        assert!(output.status.contains('3'));
    }

    #[tokio::test]
    async fn test_process_runner_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let runner = ProcessRunner::new(dir.path());

        assert!(runner.run(&["definitely-not-a-real-binary-xyz"]).await.is_err());
    }
}
