//! Intents for the edit-post dialog.

use crate::api::{CategoryId, Post};
use crate::ui::mvi::Intent;
use crate::validate::PostDraftError;

/// Intents the edit-post dialog reacts to.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Open with the form pre-populated from this post.
    Open { post: Post },

    /// Close and discard any edits.
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

    /// The update request was handed to the store worker.
    SubmitStarted,

    /// The update request finished. Success closes the dialog.
    SubmitFinished { outcome: Result<(), String> },
}

impl Intent for EditorIntent {}
