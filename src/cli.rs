//! Command-line arguments.

use clap::Parser;

use crate::commit::CommitType;
use crate::flow::FlowOptions;

/// Stage changes, draft a commit message with AI, and push it on a typed branch.
#[derive(Parser, Debug)]
#[command(name = "commitflow")]
#[command(about = "Stage changes, draft a commit message with AI, and push it on a typed branch")]
#[command(version)]
pub struct Cli {
    /// Override commit type (skips AI detection)
    #[arg(short = 't', long = "type", value_enum)]
    pub commit_type: Option<CommitType>,

    /// Branch name; the branch becomes <type>/<name>
    #[arg(short = 'n', long)]
    pub name: String,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn flow_options(&self) -> FlowOptions {
        FlowOptions {
            commit_type: self.commit_type,
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_name_only() {
        let cli = Cli::try_parse_from(["commitflow", "-n", "login"]).unwrap();
        assert_eq!(cli.name, "login");
        assert!(cli.commit_type.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_long_flags_with_type() {
        let cli = Cli::try_parse_from(["commitflow", "--type", "hotfix", "--name", "crash"]).unwrap();
        assert_eq!(cli.commit_type, Some(CommitType::Hotfix));
        assert_eq!(cli.flow_options().name, "crash");
    }

    #[test]
    fn test_missing_name_is_usage_error() {
        let err = Cli::try_parse_from(["commitflow", "-t", "fix"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = Cli::try_parse_from(["commitflow", "-t", "feat", "-n", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_name_is_not_sanitized() {
        let cli = Cli::try_parse_from(["commitflow", "-n", "weird name/..//x"]).unwrap();
        assert_eq!(cli.name, "weird name/..//x");
    }
}
