//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Construct the system clipboard and the stderr notifier once per run.
//! - Release the clipboard after the command so copied text outlives the process.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).

use anyhow::Result;
use claude_keywords::{ClipboardHost, Notifier, SystemClipboard};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::compose::EmitMode;
use crate::notifier::StderrNotifier;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let mut clipboard = SystemClipboard::new();
    let mut notifier = StderrNotifier::new(cli.quiet);
    run_with(cli, &mut clipboard, &mut notifier)
}

fn run_with(
    cli: Cli,
    clipboard: &mut dyn ClipboardHost,
    notifier: &mut dyn Notifier,
) -> Result<()> {
    let result = match cli.command {
        Commands::List {
            category,
            search,
            output,
        } => commands::list::run(category.as_deref(), search.as_deref(), output),
        Commands::Compose {
            select,
            prompt,
            copy,
            paste,
        } => commands::compose::run(
            &select,
            prompt.as_deref(),
            EmitMode::from_flags(copy, paste),
            clipboard,
            notifier,
        ),
        Commands::Keyword { id, copy } => commands::keyword::run(&id, copy, clipboard, notifier),
        Commands::Interactive => commands::interactive::run(clipboard, notifier),
        Commands::Settings { command } => commands::settings::run(command, cli.config_path),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    // Release failures never change the exit code.
    if let Err(e) = clipboard.release() {
        tracing::warn!(error = %e, "clipboard contents may not outlive the process");
    }
    result
}
