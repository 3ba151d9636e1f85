//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use git2::{Repository, Signature};

/// Run a git command in `dir` for test setup, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a git repository with one initial commit on the default branch.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        {
            let mut config = repo.config().expect("Failed to open repo config");
            config
                .set_str("user.name", "Test User")
                .expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
            config
                .set_bool("commit.gpgsign", false)
                .expect("Failed to disable signing");
        }

        let test_repo = Self { dir, repo };
        test_repo.commit_file("README.md", "# test\n", "initial commit");
        test_repo
    }

    /// Create a repository whose `origin` is a fresh bare repository.
    ///
    /// Returns the repo and the temp dir holding the remote (keep it alive).
    pub fn with_origin() -> (Self, tempfile::TempDir) {
        let test_repo = Self::new();
        let remote_dir = tempfile::tempdir().expect("Failed to create remote dir");
        Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");
        test_repo
            .repo
            .remote(
                "origin",
                remote_dir.path().to_str().expect("Invalid remote path"),
            )
            .expect("Failed to add origin remote");
        (test_repo, remote_dir)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file in the working tree without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).expect("Failed to write test file");
    }

    /// Write, stage, and commit a file. Uses git2 so no hooks run.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) {
        self.write_file(name, content);

        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit");
    }

    /// Name of the checked-out branch.
    pub fn current_branch(&self) -> String {
        git(self.path(), &["rev-parse", "--abbrev-ref", "HEAD"])
            .trim()
            .to_string()
    }

    /// Subject line of the HEAD commit.
    pub fn head_message(&self) -> String {
        git(self.path(), &["log", "-1", "--format=%s"]).trim().to_string()
    }

    /// Upstream of the current branch, e.g. `origin/feature/x`.
    pub fn upstream(&self) -> String {
        git(
            self.path(),
            &["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"],
        )
        .trim()
        .to_string()
    }
}
