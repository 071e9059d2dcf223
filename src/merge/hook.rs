//! Post-merge hooks
//!
//! A hook runs after a successful merge and before the merge commit is
//! amended. Whatever it stages ends up in the pushed merge commit.

use crate::error::Result;
use crate::git::GitWorkspace;
use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// File written by [`MarkerFileHook`] by default
pub const DEFAULT_MARKER_FILE: &str = "pretend_hook_output.txt";

/// Local step run between merge and amend
#[async_trait]
pub trait PostMergeHook: Send + Sync {
    /// Run the hook against the merged working tree
    async fn run(&self, git: &GitWorkspace<'_>) -> Result<()>;
}

/// Appends a line to a marker file in the workspace root and stages it
#[derive(Debug, Clone)]
pub struct MarkerFileHook {
    file_name: String,
}

impl MarkerFileHook {
    /// Hook writing to the given file name (relative to the workspace root)
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Default for MarkerFileHook {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_FILE)
    }
}

#[async_trait]
impl PostMergeHook for MarkerFileHook {
    async fn run(&self, git: &GitWorkspace<'_>) -> Result<()> {
        info!("run hooks...");
        let path = git.root().join(&self.file_name);

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&path).await?;
        file.write_all(b"hello\n").await?;
        file.flush().await?;
        drop(file);

        git.add(&self.file_name).await
    }
}
