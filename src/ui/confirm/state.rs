//! State for the delete-confirmation dialog.

use crate::api::PostId;
use crate::ui::mvi::UiState;

/// State of the delete-confirmation dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmState {
    /// Dialog is not visible.
    #[default]
    Hidden,

    /// Dialog is open for one post.
    Visible {
        /// Post to delete on confirmation.
        id: PostId,
        /// Title shown in the prompt.
        title: String,
        /// True when the Cancel button is highlighted.
        cancel_selected: bool,
        /// The delete request is in flight.
        pending: bool,
    },
}

impl UiState for ConfirmState {}

impl ConfirmState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Visible { pending: true, .. })
    }

    pub fn target(&self) -> Option<PostId> {
        match self {
            Self::Visible { id, .. } => Some(*id),
            Self::Hidden => None,
        }
    }

    pub fn cancel_selected(&self) -> bool {
        matches!(
            self,
            Self::Visible {
                cancel_selected: true,
                ..
            }
        )
    }
}
