//! Claude Keywords TUI - compose Claude prompts from keywords in the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Catalogue data or prompt composition (see `crates/core`).
//! - Settings file format (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` runs before CLI parsing so `.env` values feed clap `env` args.
//! - The TUI enters raw mode and alternate screen on startup.
//! - Text emitted by a paste is printed only after the terminal is restored.
//! - The clipboard is released last, after the terminal is restored.

use anyhow::{Context, Result};
use clap::Parser;
use claude_keywords::{Composer, catalog};
use claude_keywords_config::ConfigLoader;
use claude_keywords_config::constants::{
    DEFAULT_CHANNEL_CAPACITY, DEFAULT_LOG_DIR, DEFAULT_UI_TICK_MS, TUI_LOG_FILE_NAME,
};
use claude_keywords_tui::action::Action;
use claude_keywords_tui::app::App;
use claude_keywords_tui::cli::Cli;
use claude_keywords_tui::runtime::{
    config::{load_settings, persist_theme},
    terminal::TerminalGuard,
};
use claude_keywords_tui::ui::Toast;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    ConfigLoader::new().load_dotenv()?;
    let cli = Cli::parse();

    let loaded = load_settings(&cli)?;

    let log_dir = loaded
        .settings
        .log_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // _log_guard must live for all of main() so buffered logs are flushed.
    let file_appender = tracing_appender::rolling::daily(&log_dir, TUI_LOG_FILE_NAME);
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    for id in &cli.select {
        catalog::require(id)?;
    }
    let composer = Composer::with_selection(cli.prompt.clone().unwrap_or_default(), &cli.select);

    let mut app = App::new(composer, loaded.settings.theme);
    if let Some(warning) = &loaded.warning {
        tracing::warn!(path = %loaded.config_path.display(), %warning, "ignoring settings file");
        app.toasts.push(Toast::error("Settings Ignored", warning.clone()));
    }
    tracing::info!(
        theme = %loaded.settings.theme,
        selected = app.composer.selection_count(),
        "starting TUI"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let action = match event_result {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Input(key),
                Ok(Event::Resize(width, height)) => Action::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "terminal event stream failed");
                    break;
                }
            };
            if tx.send(action).await.is_err() {
                break;
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    while !app.should_quit {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(?action, "handling action");
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    input_task.abort();
    drop(terminal);
    drop(terminal_guard);

    if app.theme_changed
        && let Err(e) = persist_theme(&loaded.config_path, app.color_theme)
    {
        tracing::error!(error = %e, "failed to persist theme");
        eprintln!("Warning: {e:#}");
    }

    if let Some(text) = app.pasted_text.take() {
        println!("{text}");
    }

    if let Err(e) = app.release_clipboard() {
        tracing::warn!(error = %e, "clipboard contents may not outlive the process");
    }

    Ok(())
}
