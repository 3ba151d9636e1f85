//! Commit type classification: model first, keyword fallback second.

use serde::Deserialize;
use tracing::debug;

use crate::commit::CommitType;
use crate::commit::prompt::CLASSIFY_SYSTEM_PROMPT;
use crate::llm::{CompletionClient, diff_user_message};

/// Keyword rules, checked in order. The first rule with any matching keyword wins.
const KEYWORD_RULES: &[(&[&str], CommitType)] = &[
    (&["bug", "error", "issue"], CommitType::Fix),
    (&["add", "new", "implement"], CommitType::Feature),
    (&["refactor", "rename", "reorganize"], CommitType::Refactor),
    (&["update deps", "docs", "ci", "workflow"], CommitType::Chore),
    (&["critical", "patch", "emergency"], CommitType::Hotfix),
];

/// Where a classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    Model,
    KeywordFallback,
}

/// A commit type plus the gitmoji to prefix the message with (may be empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub commit_type: CommitType,
    pub gitmoji: String,
    pub source: ClassificationSource,
}

impl Classification {
    fn fallback(diff: &str) -> Self {
        Self {
            commit_type: detect_type_keywords(diff),
            gitmoji: String::new(),
            source: ClassificationSource::KeywordFallback,
        }
    }
}

/// Expected reply shape: `{"type": "...", "gitmoji": "..."}`.
#[derive(Debug, Deserialize)]
struct TypeReply {
    #[serde(rename = "type")]
    commit_type: String,
    #[serde(default)]
    gitmoji: String,
}

/// Classify a diff by case-insensitive substring match.
///
/// Priority is fixed: fix, feature, refactor, chore, hotfix, then chore as
/// the default. A diff mentioning both "bug" and "add" is a fix.
pub fn detect_type_keywords(diff: &str) -> CommitType {
    let lower = diff.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, commit_type)| *commit_type)
        .unwrap_or(CommitType::Chore)
}

/// Ask the model for a commit type and gitmoji.
///
/// Never fails: request errors, unparseable replies, and unknown types all
/// fall back to [`detect_type_keywords`] with an empty gitmoji.
pub async fn classify(diff: &str, llm: &dyn CompletionClient) -> Classification {
    let reply = match llm
        .complete(CLASSIFY_SYSTEM_PROMPT, &diff_user_message(diff))
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            debug!("Classification request failed: {}", e);
            eprintln!("\x1b[33m⚠️ AI detection failed, using keyword fallback.\x1b[0m");
            return Classification::fallback(diff);
        }
    };

    debug!("Raw classification reply: {}", reply);

    let parsed: TypeReply = match serde_json::from_str(reply.trim()) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Failed to parse classification JSON: {}", e);
            eprintln!("\x1b[33m⚠️ AI detection failed, using keyword fallback.\x1b[0m");
            return Classification::fallback(diff);
        }
    };

    match parsed.commit_type.parse::<CommitType>() {
        Ok(commit_type) => Classification {
            commit_type,
            gitmoji: parsed.gitmoji,
            source: ClassificationSource::Model,
        },
        Err(e) => {
            debug!("{}", e);
            eprintln!("\x1b[33m⚠️ AI returned invalid type, using keyword fallback.\x1b[0m");
            Classification::fallback(diff)
        }
    }
}
