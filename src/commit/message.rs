//! Commit message generation via the language model.

use tracing::debug;

use crate::commit::prompt::MESSAGE_SYSTEM_PROMPT;
use crate::error::LlmError;
use crate::llm::{CompletionClient, diff_user_message};

/// Ask the model for a one-line commit message for `diff`.
///
/// The reply is trimmed and otherwise used verbatim. There is no fallback:
/// a failed request or an empty reply is returned as an error.
pub async fn generate_commit_message(
    diff: &str,
    llm: &dyn CompletionClient,
) -> Result<String, LlmError> {
    debug!("Commit message prompt: {} chars of diff", diff.len());

    let reply = llm
        .complete(MESSAGE_SYSTEM_PROMPT, &diff_user_message(diff))
        .await?;

    let message = reply.trim();
    if message.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(message.to_string())
}

/// Prefix `text` with `gitmoji`, dropping the separator when either side is empty.
pub fn compose_message(gitmoji: &str, text: &str) -> String {
    format!("{} {}", gitmoji, text).trim().to_string()
}
