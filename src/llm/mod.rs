//! Language model access: the completion port and its OpenAI-compatible client.

pub mod openai;

use async_trait::async_trait;

use crate::error::LlmError;

pub use openai::OpenAiClient;

/// A single-turn chat completion: one system instruction, one user message.
///
/// The flow only ever needs the assistant's text reply, so that is all this
/// port returns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

/// Format a diff as the user message for both classification and message generation.
pub fn diff_user_message(diff: &str) -> String {
    format!("Git diff:\n{}", diff)
}
