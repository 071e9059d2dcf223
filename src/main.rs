//! merge-me - merge labelled pull requests
//!
//! CLI binary that merges every open pull request carrying the trigger label
//! into trunk, then reports back on the pull request.

use clap::{Parser, Subcommand};
use merge_me::types::{DEFAULT_REMOTE, DEFAULT_TRIGGER_LABEL, DEFAULT_TRUNK, MergeSettings};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;

#[derive(Parser)]
#[command(name = "merge-me")]
#[command(about = "Merge labelled pull requests into trunk and report back")]
#[command(version)]
struct Cli {
    /// Path to the git workspace (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Repository as OWNER/REPO (defaults to the push remote's repository)
    #[arg(long)]
    repo: Option<String>,

    /// Label that marks a pull request as ready to merge
    #[arg(long, default_value = DEFAULT_TRIGGER_LABEL)]
    label: String,

    /// Branch to merge into and push
    #[arg(long, default_value = DEFAULT_TRUNK)]
    trunk: String,

    /// Git remote to push to
    #[arg(long, default_value = DEFAULT_REMOTE)]
    remote: String,

    /// Dry run - list candidates without running git or touching PRs
    #[arg(long)]
    dry_run: bool,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));

    let result = match cli.command {
        None => {
            let settings = MergeSettings {
                trigger_label: cli.label,
                trunk: cli.trunk,
                remote: cli.remote,
            };
            cli::run_merge(&path, cli.repo.as_deref(), &settings, cli.dry_run).await
        }
        Some(Commands::Auth { action }) => match action {
            AuthAction::Test => cli::run_auth_test().await,
            AuthAction::Setup => {
                cli::run_auth_setup();
                Ok(())
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
