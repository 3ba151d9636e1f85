//! Git operations: the `Vcs` port, the `git` subprocess adapter, and branch resolution.

pub mod branch;
pub mod cli;

use async_trait::async_trait;

use crate::error::GitError;

pub use branch::{BranchResolution, branch_name, resolve_branch};
pub use cli::{GitCli, check_git_installed, ensure_repository};

/// Repository operations the commit flow depends on.
///
/// Each method maps to exactly one git invocation so fakes can assert which
/// commands a scenario would have run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Vcs: Send + Sync {
    /// Stage all working-tree changes (`git add -A`).
    async fn stage_all(&self) -> Result<(), GitError>;

    /// Unified diff of staged changes (`git diff --staged`). Empty when nothing is staged.
    async fn staged_diff(&self) -> Result<String, GitError>;

    /// Whether `name` appears in `git branch`.
    async fn local_branch_exists(&self, name: &str) -> Result<bool, GitError>;

    /// Whether `origin/<name>` appears in `git branch -r`.
    async fn remote_branch_exists(&self, name: &str) -> Result<bool, GitError>;

    /// `git checkout <name>`
    async fn checkout(&self, name: &str) -> Result<(), GitError>;

    /// `git checkout -b <name> origin/<name>`
    async fn checkout_tracking(&self, name: &str) -> Result<(), GitError>;

    /// `git checkout -b <name>`
    async fn checkout_new(&self, name: &str) -> Result<(), GitError>;

    /// `git commit -m <message>`
    async fn commit(&self, message: &str) -> Result<(), GitError>;

    /// `git push origin <branch> -u`
    async fn push(&self, branch: &str) -> Result<(), GitError>;
}
