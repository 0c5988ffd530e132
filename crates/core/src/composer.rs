//! Selection-and-composition engine.
//!
//! Responsibilities:
//! - Track the ordered set of selected keyword ids.
//! - Track the custom base prompt.
//! - Derive the final text emitted to the clipboard.
//!
//! Does NOT handle:
//! - Clipboard or notification side effects (see `session`).
//! - Validation of ids typed by users (see `catalog::require`).
//!
//! Invariants:
//! - `selected` never contains duplicates; order is selection order.
//! - Ids missing from the catalogue contribute nothing to the composed text.
//! - A non-blank custom prompt is always followed by the separator, even when
//!   nothing is selected.

use crate::catalog;

/// Blank-line separator placed between composed parts.
pub const SEPARATOR: &str = "\n\n";

/// Session-scoped selection state and custom prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    selected: Vec<String>,
    custom_prompt: String,
}

impl Composer {
    /// Create an empty composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a composer by toggling each id in order.
    ///
    /// An id listed twice cancels out, exactly like two toggles.
    pub fn with_selection<I, S>(custom_prompt: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut composer = Self::new();
        composer.set_custom_prompt(custom_prompt);
        for id in ids {
            composer.toggle(id.as_ref());
        }
        composer
    }

    /// Remove `id` if selected, otherwise append it.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Replace the custom prompt, including with an empty string.
    pub fn set_custom_prompt(&mut self, text: impl Into<String>) {
        self.custom_prompt = text.into();
    }

    /// Empty the selection and reset the custom prompt.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.custom_prompt.clear();
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn selection_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn custom_prompt(&self) -> &str {
        &self.custom_prompt
    }

    /// True when the raw custom prompt is non-empty (whitespace counts).
    pub fn has_custom_prompt(&self) -> bool {
        !self.custom_prompt.is_empty()
    }

    /// Compose the text to emit.
    ///
    /// Keyword texts are joined with [`SEPARATOR`] in selection order. A
    /// non-blank custom prompt is trimmed and prepended with the separator.
    pub fn compose_final_text(&self) -> String {
        let keywords = self
            .selected
            .iter()
            .filter_map(|id| catalog::find(id))
            .map(|record| record.keyword)
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        let prompt = self.custom_prompt.trim();
        if prompt.is_empty() {
            keywords
        } else {
            format!("{prompt}{SEPARATOR}{keywords}")
        }
    }

    /// True when the composed text is blank.
    pub fn is_empty_result(&self) -> bool {
        self.compose_final_text().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_composer() {
        let composer = Composer::new();
        assert_eq!(composer.compose_final_text(), "");
        assert!(composer.is_empty_result());
    }

    #[test]
    fn test_single_keyword() {
        let mut composer = Composer::new();
        composer.toggle("think-basic");
        assert_eq!(composer.compose_final_text(), "think");
        assert!(!composer.is_empty_result());
    }

    #[test]
    fn test_keywords_follow_selection_order() {
        let mut composer = Composer::new();
        composer.toggle("tool-parallel");
        composer.toggle("think-basic");
        assert_eq!(
            composer.compose_final_text(),
            "Use tools in parallel when possible to optimize performance.\n\nthink"
        );
    }

    #[test]
    fn test_custom_prompt_is_trimmed_and_prepended() {
        let mut composer = Composer::new();
        composer.set_custom_prompt("  Summarize this file  ");
        composer.toggle("output-concise");
        assert_eq!(
            composer.compose_final_text(),
            "Summarize this file\n\nPlease be concise and direct in your response."
        );
    }

    #[test]
    fn test_prompt_without_selection_keeps_trailing_separator() {
        let mut composer = Composer::new();
        composer.set_custom_prompt("Explain lifetimes");
        assert_eq!(composer.compose_final_text(), "Explain lifetimes\n\n");
        assert!(!composer.is_empty_result());
    }

    #[test]
    fn test_whitespace_prompt_is_ignored() {
        let mut composer = Composer::new();
        composer.set_custom_prompt(" \n\t ");
        assert!(composer.has_custom_prompt());
        assert_eq!(composer.compose_final_text(), "");
        assert!(composer.is_empty_result());
    }

    #[test]
    fn test_reselect_moves_to_end() {
        let mut composer = Composer::new();
        composer.toggle("think-basic");
        composer.toggle("reason-verify");
        composer.toggle("think-basic");
        composer.toggle("think-basic");
        assert_eq!(composer.selected_ids(), ["reason-verify", "think-basic"]);
    }

    #[test]
    fn test_unknown_id_is_kept_but_contributes_nothing() {
        let mut composer = Composer::new();
        composer.toggle("not-a-keyword");
        composer.toggle("think-hard");
        assert_eq!(composer.selection_count(), 2);
        assert_eq!(composer.compose_final_text(), "think hard");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut composer = Composer::with_selection("base", ["think-ultra", "tool-chain"]);
        composer.clear();
        assert_eq!(composer.selection_count(), 0);
        assert_eq!(composer.custom_prompt(), "");
        assert_eq!(composer.compose_final_text(), "");
    }

    #[test]
    fn test_with_selection_duplicate_cancels() {
        let composer = Composer::with_selection("", ["think-basic", "think-basic"]);
        assert_eq!(composer.selection_count(), 0);
    }
}
