//! State for the new-category dialog.

use crate::ui::mvi::UiState;

/// State of the new-category dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryDialogState {
    /// Dialog is not visible.
    #[default]
    Hidden,

    /// Dialog is open.
    Visible {
        /// Name being typed.
        name: String,
        /// Validation or request failure to show under the input.
        error: Option<String>,
        /// A create request is in flight.
        submitting: bool,
    },
}

impl UiState for CategoryDialogState {}

impl CategoryDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Visible { submitting: true, .. })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Visible { name, .. } => Some(name),
            Self::Hidden => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Visible { error, .. } => error.as_deref(),
            Self::Hidden => None,
        }
    }
}
