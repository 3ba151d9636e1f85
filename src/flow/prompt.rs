//! Interactive accept / edit / cancel prompt.

use dialoguer::{Input, Select};

use crate::error::FlowError;

/// The user's decision on a suggested commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Accept,
    Edit,
    Cancel,
}

/// Terminal interaction used by the commit flow.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Show the suggested message and ask what to do with it.
    fn choose_action(&self, suggested: &str) -> Result<UserAction, FlowError>;

    /// Let the user edit the message, starting from `initial`.
    fn edit_message(&self, initial: &str) -> Result<String, FlowError>;
}

/// `dialoguer`-backed prompter for real terminals.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

const CHOICES: [(&str, UserAction); 3] = [
    ("✅ Accept and commit", UserAction::Accept),
    ("✏️  Edit message", UserAction::Edit),
    ("❌ Cancel", UserAction::Cancel),
];

impl Prompter for DialoguerPrompter {
    fn choose_action(&self, suggested: &str) -> Result<UserAction, FlowError> {
        let items: Vec<&str> = CHOICES.iter().map(|(label, _)| *label).collect();
        let selection = Select::new()
            .with_prompt(format!(
                "📝 AI Suggested Commit: \x1b[32m{}\x1b[0m\nWhat would you like to do?",
                suggested
            ))
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| FlowError::Prompt(e.to_string()))?;

        Ok(CHOICES[selection].1)
    }

    fn edit_message(&self, initial: &str) -> Result<String, FlowError> {
        Input::<String>::new()
            .with_prompt("Edit your commit message")
            .with_initial_text(initial)
            .interact_text()
            .map_err(|e| FlowError::Prompt(e.to_string()))
    }
}
