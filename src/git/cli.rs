//! `Vcs` implementation that shells out to the system `git` binary.
//!
//! Using the binary inherits the user's git config, hooks, SSH agent, and
//! credential store, and keeps the exact argument shapes existing
//! repositories expect.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use git2::Repository;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

use super::Vcs;
use super::branch::{parse_local_branches, parse_remote_branches};

/// Remote used for tracking-branch lookups and pushes.
pub const REMOTE: &str = "origin";

/// Check that `git` is installed and on PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map(|_| ()).map_err(|_| GitError::NotInstalled)
}

/// Verify `dir` is inside a git work tree.
pub fn ensure_repository(dir: &Path) -> Result<(), GitError> {
    Repository::discover(dir)
        .map(|_| ())
        .map_err(GitError::NotARepository)
}

/// Runs git commands, optionally pinned to a working directory.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Run git in the process's current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `dir` instead of the current directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(dir.into()),
        }
    }

    /// Run a git command and return its stdout.
    async fn run_git(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        debug!("git {}", args.join(" "));

        let mut command = Command::new("git");
        command
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|e| GitError::SpawnFailed {
            operation: operation.to_string(),
            source: e,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed {
                operation: operation.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl Vcs for GitCli {
    async fn stage_all(&self) -> Result<(), GitError> {
        self.run_git(&["add", "-A"], "add").await.map(|_| ())
    }

    async fn staged_diff(&self) -> Result<String, GitError> {
        self.run_git(&["diff", "--staged"], "diff").await
    }

    async fn local_branch_exists(&self, name: &str) -> Result<bool, GitError> {
        let output = self.run_git(&["branch"], "branch").await?;
        Ok(parse_local_branches(&output).iter().any(|b| b == name))
    }

    async fn remote_branch_exists(&self, name: &str) -> Result<bool, GitError> {
        let output = self.run_git(&["branch", "-r"], "branch -r").await?;
        Ok(parse_remote_branches(&output, REMOTE)
            .iter()
            .any(|b| b == name))
    }

    async fn checkout(&self, name: &str) -> Result<(), GitError> {
        self.run_git(&["checkout", name], "checkout").await.map(|_| ())
    }

    async fn checkout_tracking(&self, name: &str) -> Result<(), GitError> {
        let upstream = format!("{}/{}", REMOTE, name);
        self.run_git(&["checkout", "-b", name, &upstream], "checkout -b")
            .await
            .map(|_| ())
    }

    async fn checkout_new(&self, name: &str) -> Result<(), GitError> {
        self.run_git(&["checkout", "-b", name], "checkout -b")
            .await
            .map(|_| ())
    }

    async fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-m", message], "commit")
            .await
            .map(|_| ())
    }

    async fn push(&self, branch: &str) -> Result<(), GitError> {
        self.run_git(&["push", REMOTE, branch, "-u"], "push")
            .await
            .map(|_| ())
    }
}
