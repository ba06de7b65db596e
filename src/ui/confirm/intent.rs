//! Intents for the delete-confirmation dialog.

use crate::api::PostId;
use crate::ui::mvi::Intent;

/// Intents the delete-confirmation dialog reacts to.
#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// Open for one post. Cancel starts highlighted.
    Open { id: PostId, title: String },

    /// Close without deleting.
    Close,

    /// Highlight the Delete button.
    SelectDelete,

    /// Highlight the Cancel button.
    SelectCancel,

    /// The delete request was handed to the store worker.
    DeleteStarted,

    /// The delete request finished, either way; the dialog closes and any
    /// failure is reported outside it.
    Finished,
}

impl Intent for ConfirmIntent {}
