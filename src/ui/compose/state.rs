//! State for the new-post dialog.

use crate::ui::form::PostForm;
use crate::ui::mvi::UiState;

/// State of the new-post dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ComposeState {
    /// Dialog is not visible.
    #[default]
    Hidden,

    /// Dialog is open.
    Visible {
        form: PostForm,
        /// A create request is in flight; edits are dropped until it lands.
        submitting: bool,
        /// Failure message from the last submit.
        api_error: Option<String>,
        /// Ticks left on the success notice. Zero means no notice.
        flash_ticks: u16,
    },
}

impl UiState for ComposeState {}

impl ComposeState {
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

    /// True while the "post added" notice should be on screen.
    pub fn flash_visible(&self) -> bool {
        matches!(self, Self::Visible { flash_ticks, .. } if *flash_ticks > 0)
    }

    pub fn api_error(&self) -> Option<&str> {
        match self {
            Self::Visible { api_error, .. } => api_error.as_deref(),
            Self::Hidden => None,
        }
    }
}
