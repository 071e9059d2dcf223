//! Git operations used by the merge sequence

use crate::error::{Error, Result};
use crate::git::{quote_command, CommandOutput, CommandRunner};
use std::path::Path;

/// A git working tree driven through a [`CommandRunner`]
///
/// The working tree is treated as disposable: `clean` and `reset_hard`
/// throw away local state without asking.
pub struct GitWorkspace<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> GitWorkspace<'a> {
    /// Wrap a runner
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Root directory of the working tree
    pub fn root(&self) -> &Path {
        self.runner.workdir()
    }

    /// Run a command, turning a non-zero exit into [`Error::Command`]
    async fn run_checked(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.runner.run(args).await?;
        if output.success {
            Ok(output)
        } else {
            Err(Error::Command {
                command: quote_command(args),
                status: output.status,
                stdout: output.stdout,
                stderr: output.stderr,
            })
        }
    }

    /// Local ref name a fetched commit is stored under
    pub fn fetched_ref(sha: &str) -> String {
        format!("sha_{sha}")
    }

    /// Fetch a commit from another repository into `sha_<sha>`
    pub async fn fetch(&self, clone_url: &str, sha: &str) -> Result<()> {
        let refspec = format!("{sha}:{}", Self::fetched_ref(sha));
        self.run_checked(&["git", "fetch", clone_url, &refspec])
            .await
            .map(drop)
    }

    /// Switch the working tree to a branch
    pub async fn checkout(&self, branch: &str) -> Result<()> {
        self.run_checked(&["git", "checkout", branch]).await.map(drop)
    }

    /// Current HEAD commit hash
    pub async fn rev_parse_head(&self) -> Result<String> {
        let output = self.run_checked(&["git", "rev-parse", "HEAD"]).await?;
        let sha = output.stdout.trim();
        if sha.is_empty() {
            return Err(Error::Parse("git rev-parse HEAD printed nothing".to_string()));
        }
        Ok(sha.to_string())
    }

    /// Remove untracked and ignored files
    pub async fn clean(&self) -> Result<()> {
        self.run_checked(&["git", "clean", "-dfx"]).await.map(drop)
    }

    /// Merge a commit into the checked-out branch
    pub async fn merge(&self, sha: &str) -> Result<CommandOutput> {
        self.run_checked(&["git", "merge", sha]).await
    }

    /// Abort an in-progress merge
    pub async fn merge_abort(&self) -> Result<()> {
        self.run_checked(&["git", "merge", "--abort"]).await.map(drop)
    }

    /// Hard-reset the working tree and branch to a commit
    pub async fn reset_hard(&self, sha: &str) -> Result<()> {
        self.run_checked(&["git", "reset", "--hard", sha]).await.map(drop)
    }

    /// Stage a path
    pub async fn add(&self, path: &str) -> Result<()> {
        self.run_checked(&["git", "add", path]).await.map(drop)
    }

    /// Fold staged changes into HEAD, keeping its message
    pub async fn commit_amend(&self) -> Result<()> {
        self.run_checked(&["git", "commit", "--amend", "--no-edit"])
            .await
            .map(drop)
    }

    /// Push a branch to a remote
    pub async fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_checked(&["git", "push", remote, branch]).await.map(drop)
    }

    /// URL configured for a remote
    pub async fn remote_url(&self, remote: &str) -> Result<String> {
        let output = self.run_checked(&["git", "remote", "get-url", remote]).await?;
        Ok(output.stdout.trim().to_string())
    }
}
