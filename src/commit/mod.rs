//! Commit typing and AI-generated commit messages.

pub mod classify;
pub mod message;
pub mod prompt;

use std::fmt;
use std::str::FromStr;

pub use classify::{Classification, ClassificationSource, classify, detect_type_keywords};
pub use message::{compose_message, generate_commit_message};

/// The change categories a commit (and its branch prefix) can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CommitType {
    Feature,
    Fix,
    Chore,
    Refactor,
    Hotfix,
}

impl CommitType {
    pub const ALL: [CommitType; 5] = [
        CommitType::Feature,
        CommitType::Fix,
        CommitType::Chore,
        CommitType::Refactor,
        CommitType::Hotfix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feature => "feature",
            CommitType::Fix => "fix",
            CommitType::Chore => "chore",
            CommitType::Refactor => "refactor",
            CommitType::Hotfix => "hotfix",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = String;

    /// Exact lowercase match; the model is told to use these spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown commit type: {}", s))
    }
}
