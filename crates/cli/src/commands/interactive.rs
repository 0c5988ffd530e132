//! Guided form command.
//!
//! Responsibilities:
//! - Ask for an optional custom prompt.
//! - Offer one single-select (with a "None" choice) per single-mode category
//!   and a multi-select for multiple-mode categories.
//! - Copy the result to the clipboard or print it.
//!
//! Does NOT handle:
//! - Composition rules (see `claude_keywords::Composer`).
//!
//! Invariants:
//! - Picks are fed to the composer in category display order.

use anyhow::{Context, Result};
use claude_keywords::{
    Category, ClipboardHost, Composer, KeywordRecord, Notifier, SelectionMode, catalog,
};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

use super::compose::{EmitMode, execute};

const NONE_CHOICE: &str = "None";
const FINAL_ACTIONS: [&str; 2] = ["Copy to clipboard", "Print to stdout"];

/// Labels offered for one category.
pub fn choices(category: Category) -> Vec<String> {
    let mut labels = Vec::new();
    if category.selection_mode() == SelectionMode::Single {
        labels.push(NONE_CHOICE.to_string());
    }
    labels.extend(
        catalog::in_category(category)
            .into_iter()
            .map(KeywordRecord::option_label),
    );
    labels
}

/// Map chosen indices (into `choices(category)`) back to records.
pub fn picked_records(category: Category, indices: &[usize]) -> Vec<&'static KeywordRecord> {
    let records = catalog::in_category(category);
    let offset = match category.selection_mode() {
        SelectionMode::Single => 1,
        SelectionMode::Multiple => 0,
    };
    indices
        .iter()
        .filter_map(|i| i.checked_sub(offset))
        .filter_map(|i| records.get(i).copied())
        .collect()
}

/// Build the composer from the form answers.
pub fn compose_from_form(prompt: &str, picks: &[(Category, Vec<usize>)]) -> Composer {
    let ids = picks
        .iter()
        .flat_map(|(category, indices)| picked_records(*category, indices))
        .map(|record| record.id);
    Composer::with_selection(prompt, ids)
}

fn ask(theme: &ColorfulTheme, category: Category) -> Result<Vec<usize>> {
    let meta = category.meta();
    let prompt = format!("{} - {}", meta.form_title, meta.form_hint);
    let labels = choices(category);
    let picked = match category.selection_mode() {
        SelectionMode::Single => vec![
            Select::with_theme(theme)
                .with_prompt(prompt)
                .items(&labels)
                .default(0)
                .interact()?,
        ],
        SelectionMode::Multiple => MultiSelect::with_theme(theme)
            .with_prompt(prompt)
            .items(&labels)
            .interact()?,
    };
    Ok(picked)
}

pub fn run(clipboard: &mut dyn ClipboardHost, notifier: &mut dyn Notifier) -> Result<()> {
    let theme = ColorfulTheme::default();

    let prompt: String = Input::with_theme(&theme)
        .with_prompt("Custom prompt (optional)")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read custom prompt")?;

    let mut picks = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let indices =
            ask(&theme, category).with_context(|| format!("Failed to read {category} choice"))?;
        picks.push((category, indices));
    }

    let action = Select::with_theme(&theme)
        .with_prompt("Action")
        .items(&FINAL_ACTIONS)
        .default(0)
        .interact()
        .context("Failed to read action")?;
    let mode = if action == 0 {
        EmitMode::Copy
    } else {
        EmitMode::Print
    };

    let composer = compose_from_form(&prompt, &picks);
    tracing::debug!(selected = composer.selection_count(), ?mode, "form completed");
    if let Some(text) = execute(&composer, mode, clipboard, notifier)? {
        println!("{text}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExitCode, ExitCodeExt};
    use claude_keywords::CollectingNotifier;
    use claude_keywords::clipboard::RecordingClipboard;

    #[test]
    fn test_single_mode_choices_start_with_none() {
        let labels = choices(Category::Thinking);
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0], "None");
        assert!(labels[1].starts_with("Think "));
    }

    #[test]
    fn test_multiple_mode_has_no_none() {
        let labels = choices(Category::Reasoning);
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|l| l != "None"));
    }

    #[test]
    fn test_none_choice_picks_nothing() {
        assert!(picked_records(Category::Output, &[0]).is_empty());
        assert_eq!(
            picked_records(Category::Output, &[3])[0].id,
            "output-code-only"
        );
    }

    #[test]
    fn test_compose_from_form_uses_category_order() {
        let composer = compose_from_form(
            "Explain",
            &[
                (Category::Thinking, vec![2]),
                (Category::Tools, vec![0]),
                (Category::Search, vec![1]),
                (Category::Output, vec![0]),
                (Category::Reasoning, vec![0, 2]),
            ],
        );
        assert_eq!(
            composer.selected_ids(),
            [
                "think-hard",
                "tool-web-search",
                "reason-step-by-step",
                "reason-verify"
            ]
        );
        assert!(composer.compose_final_text().starts_with("Explain\n\nthink hard\n\n"));
    }

    fn no_picks() -> Vec<(Category, Vec<usize>)> {
        Category::ALL.into_iter().map(|c| (c, Vec::new())).collect()
    }

    #[test]
    fn test_empty_form_is_empty_result() {
        assert!(compose_from_form("  ", &no_picks()).is_empty_result());
    }

    #[test]
    fn test_prompt_only_form_prints_bare_text() {
        let composer = compose_from_form("Fix this", &no_picks());
        let recorder = RecordingClipboard::new();
        let mut notifier = CollectingNotifier::new();

        let text = execute(&composer, EmitMode::Print, &mut recorder.clone(), &mut notifier)
            .unwrap();

        // No header line; the separator after the prompt is kept.
        assert_eq!(text.as_deref(), Some("Fix this\n\n"));
        assert!(recorder.writes().is_empty());
    }

    #[test]
    fn test_empty_form_exits_nothing_to_emit() {
        let composer = compose_from_form("", &no_picks());
        let mut notifier = CollectingNotifier::new();

        let err = execute(
            &composer,
            EmitMode::Copy,
            &mut RecordingClipboard::new(),
            &mut notifier,
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), ExitCode::NothingToEmit);
        assert_eq!(notifier.last().unwrap().title, "Nothing to Copy");
    }
}
