//! Branch naming and resolution.

use std::fmt;

use tracing::debug;

use crate::commit::CommitType;
use crate::error::GitError;

use super::Vcs;

/// Build the branch name for a commit: `<type>/<name>`.
///
/// `name` is used verbatim; git rejects invalid ref names itself.
pub fn branch_name(commit_type: CommitType, name: &str) -> String {
    format!("{}/{}", commit_type, name)
}

/// Which of the three resolution paths was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchResolution {
    /// Branch existed locally; switched to it.
    SwitchedLocal,
    /// Branch existed only on the remote; created a tracking branch.
    TrackedRemote,
    /// Branch existed nowhere; created it from the current HEAD.
    Created,
}

impl fmt::Display for BranchResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchResolution::SwitchedLocal => write!(f, "switched to local branch"),
            BranchResolution::TrackedRemote => write!(f, "created tracking branch"),
            BranchResolution::Created => write!(f, "created new branch"),
        }
    }
}

/// Switch to `name`, creating it if needed.
///
/// Local state wins: the remote is only consulted when no local branch exists.
pub async fn resolve_branch(vcs: &dyn Vcs, name: &str) -> Result<BranchResolution, GitError> {
    let resolution = if vcs.local_branch_exists(name).await? {
        println!("\x1b[33m⚠️ Branch already exists locally. Switching to it...\x1b[0m");
        vcs.checkout(name).await?;
        BranchResolution::SwitchedLocal
    } else if vcs.remote_branch_exists(name).await? {
        println!("\x1b[33m⚠️ Branch exists in origin. Creating tracking branch...\x1b[0m");
        vcs.checkout_tracking(name).await?;
        BranchResolution::TrackedRemote
    } else {
        println!("🚀 Creating branch {}", name);
        vcs.checkout_new(name).await?;
        BranchResolution::Created
    };

    debug!("Branch {}: {}", name, resolution);
    Ok(resolution)
}

/// Parse `git branch` output into branch names.
///
/// Strips the `*` (current) and `+` (checked out in another worktree) markers
/// and skips detached-HEAD lines.
pub(crate) fn parse_local_branches(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim_start_matches(['*', '+']).trim())
        .filter(|line| !line.is_empty() && !line.starts_with('('))
        .map(String::from)
        .collect()
}

/// Parse `git branch -r` output into branch names on `remote`, without the prefix.
///
/// Symbolic refs like `origin/HEAD -> origin/main` are skipped.
pub(crate) fn parse_remote_branches(output: &str, remote: &str) -> Vec<String> {
    let prefix = format!("{}/", remote);
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.contains(" -> "))
        .filter_map(|line| line.strip_prefix(&prefix))
        .map(String::from)
        .collect()
}
