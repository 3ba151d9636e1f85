//! System prompts for the two chat completions.

/// Classification prompt. The reply must be a bare single-line JSON object.
pub const CLASSIFY_SYSTEM_PROMPT: &str = r#"You are a git assistant.
Given a git diff, classify it into one of these types: feature, fix, refactor, chore, hotfix.
Also choose an appropriate gitmoji for the commit.
Return ONLY a JSON object with this format: {"type":"feature","gitmoji":"✨"}.
Do NOT include any extra text."#;

/// Commit message prompt. The reply is used verbatim after trimming.
pub const MESSAGE_SYSTEM_PROMPT: &str = "Generate a concise conventional commit message, using gitmoji if available. Return only one line.";
