//! State for the edit-post dialog.

use crate::api::PostId;
use crate::ui::form::PostForm;
use crate::ui::mvi::UiState;

/// State of the edit-post dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    /// Dialog is not visible.
    #[default]
    Hidden,

    /// Dialog is open for one post.
    Visible {
        /// Post being replaced on save.
        id: PostId,
        form: PostForm,
        /// An update request is in flight; edits are dropped until it lands.
        submitting: bool,
        /// Failure message from the last save.
        api_error: Option<String>,
    },
}

impl UiState for EditorState {}

impl EditorState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Visible { submitting: true, .. })
    }

    pub fn form(&self) -> Option<&PostForm> {
        match self {
            Self::Visible { form, .. } => Some(form),
            Self::Hidden => None,
        }
    }

    pub fn post_id(&self) -> Option<PostId> {
        match self {
            Self::Visible { id, .. } => Some(*id),
            Self::Hidden => None,
        }
    }

    pub fn api_error(&self) -> Option<&str> {
        match self {
            Self::Visible { api_error, .. } => api_error.as_deref(),
            Self::Hidden => None,
        }
    }
}
