//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "claude-keywords")]
#[command(about = "Compose prompts from Claude keywords", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  claude-keywords list --category thinking\n  claude-keywords compose -s think-hard -s tool-parallel -p 'Refactor this module'\n  claude-keywords compose -s output-concise --copy\n  claude-keywords keyword reason-verify --copy\n  claude-keywords interactive\n"
)]
pub struct Cli {
    /// Path to a custom settings file (overrides default location).
    ///
    /// Can also be set via CLAUDE_KEYWORDS_CONFIG_PATH environment variable.
    #[arg(
        long,
        global = true,
        env = "CLAUDE_KEYWORDS_CONFIG_PATH",
        value_name = "FILE"
    )]
    pub config_path: Option<PathBuf>,

    /// Suppress success notifications on stderr (failures are still reported).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the keyword catalogue grouped by category
    List {
        /// Only show one category (thinking, tools, search, output, reasoning)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive filter over title, description and keyword text
        #[arg(long)]
        search: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Compose a prompt from selected keywords
    Compose {
        /// Keyword id to toggle (repeatable; toggling twice deselects)
        #[arg(short = 's', long = "select", value_name = "ID")]
        select: Vec<String>,

        /// Custom prompt text placed before the keywords
        #[arg(short, long, value_name = "TEXT")]
        prompt: Option<String>,

        /// Copy the composed prompt to the clipboard instead of printing it
        #[arg(long, conflicts_with = "paste")]
        copy: bool,

        /// Place the composed prompt on the clipboard and print it
        #[arg(long)]
        paste: bool,
    },

    /// Print or copy a single keyword's text
    Keyword {
        /// Keyword id (see `list`)
        id: String,

        /// Copy the keyword to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// Build a prompt through a guided form
    Interactive,

    /// Show or change persisted settings
    Settings {
        #[command(subcommand)]
        command: commands::settings::SettingsCommand,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
