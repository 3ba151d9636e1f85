//! Error types for commitflow modules using thiserror.

use thiserror::Error;

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is missing in .env")]
    MissingApiKey,
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found in PATH. Install git and try again.")]
    NotInstalled,

    #[error("Not a git repository. Run commitflow from within a git repository")]
    NotARepository(#[source] git2::Error),

    #[error("Failed to run git {operation}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },
}

/// Errors from the chat-completions API.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request to the language model failed")]
    Request(#[source] reqwest::Error),

    #[error("Language model API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Language model returned an unreadable response: {0}")]
    InvalidResponse(String),

    #[error("Language model returned an empty commit message")]
    EmptyResponse,
}

/// Errors from the commit flow.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error("Failed to generate commit message")]
    Llm(#[from] LlmError),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message_includes_operation_and_stderr() {
        let err = GitError::CommandFailed {
            operation: "push".to_string(),
            stderr: "rejected".to_string(),
        };
        assert_eq!(err.to_string(), "git push failed: rejected");
    }

    #[test]
    fn test_flow_error_is_transparent_for_git() {
        let err = FlowError::from(GitError::NotInstalled);
        assert_eq!(err.to_string(), GitError::NotInstalled.to_string());
    }

    #[test]
    fn test_api_error_message() {
        let err = LlmError::Api {
            status: 401,
            body: "invalid key".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("invalid key"));
    }

    #[test]
    fn test_message_failure_renders_each_cause_once() {
        let err = anyhow::Error::from(FlowError::from(LlmError::EmptyResponse));
        assert_eq!(
            format!("{:#}", err),
            "Failed to generate commit message: Language model returned an empty commit message"
        );
    }

    #[test]
    fn test_request_failure_chain_has_no_repeats() {
        let source = reqwest::Client::new().get("not a url").build().unwrap_err();
        let source_text = source.to_string();
        let err = anyhow::Error::from(FlowError::from(LlmError::Request(source)));
        let rendered = format!("{:#}", err);

        assert!(rendered.starts_with(
            "Failed to generate commit message: Request to the language model failed: "
        ));
        assert_eq!(rendered.matches("Request to the language model failed").count(), 1);
        assert_eq!(rendered.matches(source_text.as_str()).count(), 1);
    }

    #[test]
    fn test_spawn_failure_leaves_io_error_to_the_chain() {
        let err = GitError::SpawnFailed {
            operation: "commit".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Failed to run git commit");
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "Failed to run git commit: no such file"
        );
    }
}
