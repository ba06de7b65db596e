//! Intents for the new-category dialog.

use crate::ui::mvi::Intent;

/// Intents the new-category dialog reacts to.
#[derive(Debug, Clone)]
pub enum CategoryIntent {
    /// Open with an empty input.
    Open,

    /// Close and discard the input.
    Close,

    Input(char),
    Backspace,
    Paste(String),

    /// Validation rejected the name before any request was made.
    Rejected { message: String },

    /// The create request was handed to the store worker.
    SubmitStarted,

    /// The create request finished. Success closes the dialog.
    SubmitFinished { outcome: Result<(), String> },
}

impl Intent for CategoryIntent {}
