//! Scripted command runner for testing

#![allow(dead_code)]

use async_trait::async_trait;
use merge_me::error::Result;
use merge_me::git::{CommandOutput, CommandRunner};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Commit `git rev-parse HEAD` reports
pub const BASELINE_SHA: &str = "baseline0000";

/// Runner that records commands instead of executing them
///
/// Every command succeeds unless its arguments start with a prefix
/// registered through [`MockCommandRunner::fail_on`]. `git rev-parse HEAD`
/// answers with [`BASELINE_SHA`].
pub struct MockCommandRunner {
    workdir: PathBuf,
    calls: Mutex<Vec<Vec<String>>>,
    failures: Mutex<Vec<(Vec<String>, CommandOutput)>>,
}

impl MockCommandRunner {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
        }
    }

    /// Fail commands starting with `prefix`, printing `stdout`/`stderr`
    pub fn fail_on(&self, prefix: &[&str], stdout: &str, stderr: &str) {
        self.failures.lock().unwrap().push((
            prefix.iter().map(ToString::to_string).collect(),
            CommandOutput {
                success: false,
                status: "exit status: 1".to_string(),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        ));
    }

    /// Every command run, as argument vectors
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Every command run, joined with spaces
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.join(" ")).collect()
    }

    /// Whether any command started with `prefix`
    pub fn ran(&self, prefix: &[&str]) -> bool {
        self.calls().iter().any(|c| starts_with(c, prefix))
    }

    /// How many commands started with `prefix`
    pub fn count(&self, prefix: &[&str]) -> usize {
        self.calls().iter().filter(|c| starts_with(c, prefix)).count()
    }
}

fn starts_with(call: &[String], prefix: &[impl AsRef<str>]) -> bool {
    call.len() >= prefix.len() && call.iter().zip(prefix).all(|(a, p)| a == p.as_ref())
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let call: Vec<String> = args.iter().map(ToString::to_string).collect();
        self.calls.lock().unwrap().push(call.clone());

        if let Some((_, output)) = self
            .failures
            .lock()
            .unwrap()
            .iter()
            .find(|(prefix, _)| starts_with(&call, prefix))
        {
            return Ok(output.clone());
        }

        if starts_with(&call, &["git", "rev-parse"]) {
            return Ok(CommandOutput::ok(format!("{BASELINE_SHA}\n")));
        }

        Ok(CommandOutput::ok(""))
    }

    fn workdir(&self) -> &Path {
        &self.workdir
    }
}
