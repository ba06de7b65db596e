//! Reducer for the delete-confirmation dialog.

use crate::ui::mvi::Reducer;

use super::intent::ConfirmIntent;
use super::state::ConfirmState;

/// Reducer for delete-confirmation state transitions.
pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Open { id, title } => ConfirmState::Visible {
                id,
                title,
                cancel_selected: true,
                pending: false,
            },

            ConfirmIntent::Close | ConfirmIntent::Finished => ConfirmState::Hidden,

            ConfirmIntent::SelectDelete => select(state, false),
            ConfirmIntent::SelectCancel => select(state, true),

            ConfirmIntent::DeleteStarted => match state {
                ConfirmState::Visible { id, title, .. } => ConfirmState::Visible {
                    id,
                    title,
                    cancel_selected: false,
                    pending: true,
                },
                ConfirmState::Hidden => ConfirmState::Hidden,
            },
        }
    }
}

fn select(state: ConfirmState, cancel: bool) -> ConfirmState {
    match state {
        ConfirmState::Visible {
            id,
            title,
            pending: false,
            ..
        } => ConfirmState::Visible {
            id,
            title,
            cancel_selected: cancel,
            pending: false,
        },
        other => other,
    }
}
