//! commitflow - CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commitflow::cli::Cli;
use commitflow::config::Config;
use commitflow::flow::{DialoguerPrompter, run_flow};
use commitflow::git::{GitCli, check_git_installed, ensure_repository};
use commitflow::llm::OpenAiClient;

#[tokio::main]
async fn main() -> ExitCode {
    // Configuration comes first: a missing key stops the run before anything else.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\x1b[31m❌ {}\x1b[0m", e);
            return ExitCode::from(1);
        }
    };

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31m❌ Unexpected error:\x1b[0m {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    check_git_installed().context("git is required")?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    ensure_repository(&cwd)?;

    let vcs = GitCli::new();
    let llm = OpenAiClient::new(&config);
    let prompter = DialoguerPrompter;

    let outcome = run_flow(&cli.flow_options(), &vcs, &llm, &prompter).await?;

    Ok(ExitCode::from(outcome.exit_code()))
}

/// Log to stderr at `warn` (or `debug` with --verbose); RUST_LOG overrides both.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
