//! Reducer for the new-category dialog.

use crate::ui::mvi::Reducer;

use super::intent::CategoryIntent;
use super::state::CategoryDialogState;

/// Reducer for new-category dialog state transitions.
pub struct CategoryReducer;

impl Reducer for CategoryReducer {
    type State = CategoryDialogState;
    type Intent = CategoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CategoryIntent::Open => CategoryDialogState::Visible {
                name: String::new(),
                error: None,
                submitting: false,
            },

            CategoryIntent::Close => CategoryDialogState::Hidden,

            // Any edit clears the previous rejection.
            CategoryIntent::Input(c) => edit(state, move |name| name.push(c)),
            CategoryIntent::Backspace => edit(state, |name| {
                name.pop();
            }),
            CategoryIntent::Paste(text) => edit(state, move |name| {
                name.extend(text.chars().filter(|c| !c.is_control()));
            }),

            CategoryIntent::Rejected { message } => match state {
                CategoryDialogState::Visible {
                    name,
                    submitting: false,
                    ..
                } => CategoryDialogState::Visible {
                    name,
                    error: Some(message),
                    submitting: false,
                },
                other => other,
            },

            CategoryIntent::SubmitStarted => match state {
                CategoryDialogState::Visible { name, .. } => CategoryDialogState::Visible {
                    name,
                    error: None,
                    submitting: true,
                },
                CategoryDialogState::Hidden => CategoryDialogState::Hidden,
            },

            CategoryIntent::SubmitFinished { outcome } => match state {
                CategoryDialogState::Visible { name, .. } => match outcome {
                    Ok(()) => CategoryDialogState::Hidden,
                    Err(message) => CategoryDialogState::Visible {
                        name,
                        error: Some(message),
                        submitting: false,
                    },
                },
                CategoryDialogState::Hidden => CategoryDialogState::Hidden,
            },
        }
    }
}

fn edit(state: CategoryDialogState, apply: impl FnOnce(&mut String)) -> CategoryDialogState {
    match state {
        CategoryDialogState::Visible {
            mut name,
            submitting: false,
            ..
        } => {
            apply(&mut name);
            CategoryDialogState::Visible {
                name,
                error: None,
                submitting: false,
            }
        }
        other => other,
    }
}
