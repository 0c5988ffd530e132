//! Action protocol for the TUI event loop.
//!
//! Actions represent both raw terminal input and the user intents derived
//! from it. The input task sends `Input`/`Resize`; the main loop adds `Tick`;
//! everything else comes from `App::handle_input`.

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw key press from the terminal.
    Input(KeyEvent),
    Resize(u16, u16),
    /// Periodic tick; prunes expired toasts.
    Tick,
    Quit,

    // Navigation
    MoveUp,
    MoveDown,
    MoveTop,
    MoveBottom,

    /// Toggle the keyword under the cursor.
    ToggleSelected,
    /// Open the custom prompt editor.
    EditPrompt,
    /// Store the editor contents as the custom prompt.
    SavePrompt,
    /// Close the editor without storing.
    CancelEdit,

    /// Focus the filter bar.
    EnterFilter,
    /// Leave the filter bar, keeping the query.
    ExitFilter,
    /// Leave the filter bar and drop the query.
    ClearFilter,

    /// Copy the keyword under the cursor verbatim.
    CopyKeyword,
    /// Copy the composed prompt.
    CopyPrompt,
    /// Paste the composed prompt and quit.
    PastePrompt,
    /// Deselect everything and clear the custom prompt.
    ClearAll,

    CycleTheme,
    ToggleHelp,
}
