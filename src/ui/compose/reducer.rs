//! Reducer for the new-post dialog.

use crate::ui::form::PostForm;
use crate::ui::mvi::Reducer;

use super::intent::ComposeIntent;
use super::state::ComposeState;

/// Reducer for new-post dialog state transitions.
pub struct ComposeReducer;

impl Reducer for ComposeReducer {
    type State = ComposeState;
    type Intent = ComposeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposeIntent::Open => ComposeState::Visible {
                form: PostForm::default(),
                submitting: false,
                api_error: None,
                flash_ticks: 0,
            },

            ComposeIntent::Close => ComposeState::Hidden,

            ComposeIntent::FocusNext => edit(state, |form| form.focus_next()),
            ComposeIntent::FocusPrev => edit(state, |form| form.focus_prev()),
            ComposeIntent::Input(c) => edit(state, move |form| form.insert_char(c)),
            ComposeIntent::Backspace => edit(state, |form| form.backspace()),
            ComposeIntent::Paste(text) => edit(state, move |form| form.paste(&text)),
            ComposeIntent::CategoryCursorLeft { count } => {
                edit(state, move |form| form.move_category_cursor(-1, count))
            }
            ComposeIntent::CategoryCursorRight { count } => {
                edit(state, move |form| form.move_category_cursor(1, count))
            }
            ComposeIntent::ToggleCategory { id } => {
                edit(state, move |form| form.toggle_category(id))
            }

            ComposeIntent::Rejected { error } => {
                edit(state, move |form| form.error = Some(error))
            }

            ComposeIntent::SubmitStarted => match state {
                ComposeState::Visible { form, .. } => ComposeState::Visible {
                    form,
                    submitting: true,
                    api_error: None,
                    flash_ticks: 0,
                },
                ComposeState::Hidden => ComposeState::Hidden,
            },

            ComposeIntent::SubmitFinished {
                outcome,
                flash_ticks,
            } => match state {
                ComposeState::Visible { form, .. } => match outcome {
                    // Stay open with a fresh form so the next post can be
                    // written right away.
                    Ok(()) => ComposeState::Visible {
                        form: PostForm::default(),
                        submitting: false,
                        api_error: None,
                        flash_ticks,
                    },
                    Err(message) => ComposeState::Visible {
                        form,
                        submitting: false,
                        api_error: Some(message),
                        flash_ticks: 0,
                    },
                },
                ComposeState::Hidden => ComposeState::Hidden,
            },

            ComposeIntent::Tick => match state {
                ComposeState::Visible {
                    form,
                    submitting,
                    api_error,
                    flash_ticks,
                } => ComposeState::Visible {
                    form,
                    submitting,
                    api_error,
                    flash_ticks: flash_ticks.saturating_sub(1),
                },
                ComposeState::Hidden => ComposeState::Hidden,
            },
        }
    }
}

/// Applies a form edit when the dialog is open and idle. Edits arriving
/// while a submit is in flight are dropped.
fn edit(state: ComposeState, apply: impl FnOnce(&mut PostForm)) -> ComposeState {
    match state {
        ComposeState::Visible {
            mut form,
            submitting: false,
            api_error,
            flash_ticks,
        } => {
            apply(&mut form);
            ComposeState::Visible {
                form,
                submitting: false,
                api_error,
                flash_ticks,
            }
        }
        other => other,
    }
}
