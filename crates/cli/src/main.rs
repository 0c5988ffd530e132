//! Claude Keywords CLI - compose prompts from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - List the keyword catalogue and compose prompts from it.
//! - Print composed text to stdout or hand it to the system clipboard.
//!
//! Does NOT handle:
//! - Catalogue contents or composition rules (see `crates/core`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - stdout carries only command output; logs and notifications go to stderr.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod notifier;

use args::Cli;
use clap::Parser;
use claude_keywords_config::ConfigLoader;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            if !e.is_reported() {
                eprintln!("Error: {:#}", e);
            }
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
