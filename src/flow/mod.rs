//! Commit flow: stage, classify, branch, draft, confirm, commit, push.

pub mod prompt;

use tracing::debug;

use crate::commit::{
    ClassificationSource, CommitType, classify, compose_message, generate_commit_message,
};
use crate::error::FlowError;
use crate::git::{Vcs, branch_name, resolve_branch};
use crate::llm::CompletionClient;

pub use prompt::{DialoguerPrompter, Prompter, UserAction};

/// Options for one run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FlowOptions {
    /// Explicit commit type; skips classification when set.
    pub commit_type: Option<CommitType>,
    /// Branch name fragment, appended after `<type>/`.
    pub name: String,
}

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Nothing was staged after `git add -A`.
    NoChanges,
    /// The user declined the commit.
    Cancelled,
    /// Committed and pushed.
    Committed { branch: String, message: String },
}

impl FlowOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            FlowOutcome::NoChanges => 1,
            FlowOutcome::Cancelled | FlowOutcome::Committed { .. } => 0,
        }
    }
}

/// Run the full commit flow.
///
/// Steps run strictly in order; nothing is rolled back on failure, so a branch
/// created before a failed commit stays in place.
pub async fn run_flow(
    options: &FlowOptions,
    vcs: &dyn Vcs,
    llm: &dyn CompletionClient,
    prompter: &dyn Prompter,
) -> Result<FlowOutcome, FlowError> {
    // ── Stage ──
    println!("📦 Adding changes...");
    vcs.stage_all().await?;

    // ── Diff check ──
    let diff = vcs.staged_diff().await?;
    if diff.is_empty() {
        println!("\x1b[31m❌ No staged changes found.\x1b[0m");
        return Ok(FlowOutcome::NoChanges);
    }
    debug!("Staged diff: {} chars", diff.len());

    // ── Type resolution ──
    let (commit_type, gitmoji) = match options.commit_type {
        Some(explicit) => (explicit, String::new()),
        None => {
            println!("🤖 Detecting commit type and gitmoji automatically...");
            let classification = classify(&diff, llm).await;
            if classification.source == ClassificationSource::KeywordFallback {
                debug!("Using keyword fallback classification");
            }
            println!(
                "\x1b[32m✅ Detected type: {}, gitmoji: {}\x1b[0m",
                classification.commit_type,
                if classification.gitmoji.is_empty() {
                    "none"
                } else {
                    classification.gitmoji.as_str()
                }
            );
            (classification.commit_type, classification.gitmoji)
        }
    };

    // ── Branch ──
    let branch = branch_name(commit_type, &options.name);
    println!("🔍 Checking if branch already exists...");
    resolve_branch(vcs, &branch).await?;

    // ── Draft message ──
    println!("🤖 Generating commit message...");
    let generated = generate_commit_message(&diff, llm).await?;
    let suggested = compose_message(&gitmoji, &generated);

    // ── User decision ──
    let message = match prompter.choose_action(&suggested)? {
        UserAction::Cancel => {
            println!("\x1b[33mDeclined commit. Exiting.\x1b[0m");
            return Ok(FlowOutcome::Cancelled);
        }
        UserAction::Accept => suggested,
        UserAction::Edit => prompter.edit_message(&suggested)?,
    };

    // ── Commit and push ──
    println!("🚀 Committing: {}", message);
    vcs.commit(&message).await?;

    println!("⬆️ Pushing...");
    vcs.push(&branch).await?;

    println!("\x1b[32m✅ Done!\x1b[0m");

    Ok(FlowOutcome::Committed { branch, message })
}
