//! Intents for the new-post dialog.

use crate::api::CategoryId;
use crate::ui::mvi::Intent;
use crate::validate::PostDraftError;

/// Intents the new-post dialog reacts to.
#[derive(Debug, Clone)]
pub enum ComposeIntent {
    /// Open with a fresh, empty form.
    Open,

    /// Close and discard the draft.
    Close,

    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    Paste(String),

    /// Move the category cursor; `count` is the current category total.
    CategoryCursorLeft { count: usize },
    CategoryCursorRight { count: usize },
    ToggleCategory { id: CategoryId },

    /// Validation rejected the draft before any request was made.
    Rejected { error: PostDraftError },

    /// The create request was handed to the store worker.
    SubmitStarted,

    /// The create request finished. The store already re-fetched, so the
    /// list behind the dialog is current by the time this arrives.
    SubmitFinished {
        outcome: Result<(), String>,
        /// How long the success notice stays up, in ticks.
        flash_ticks: u16,
    },

    /// UI tick; counts the success notice down.
    Tick,
}

impl Intent for ComposeIntent {}
