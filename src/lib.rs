//! commitflow - stage changes, draft a commit message with an LLM, and push it on a typed branch.
//!
//! # Overview
//!
//! commitflow stages everything, asks a chat-completions model to classify the
//! change (falling back to keyword matching), switches to `<type>/<name>`,
//! drafts a one-line commit message, lets the user accept, edit, or cancel it,
//! then commits and pushes with upstream tracking.

pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod flow;
pub mod git;
pub mod llm;

// Re-export commonly used types
pub use commit::{Classification, CommitType};
pub use config::Config;
pub use error::{ConfigError, FlowError, GitError, LlmError};
pub use flow::{FlowOptions, FlowOutcome, run_flow};
