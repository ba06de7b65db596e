//! Reducer for the edit-post dialog.

use crate::ui::form::PostForm;
use crate::ui::mvi::Reducer;

use super::intent::EditorIntent;
use super::state::EditorState;

/// Reducer for edit-post dialog state transitions.
pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Open { post } => EditorState::Visible {
                id: post.id,
                form: PostForm::prefilled(&post),
                submitting: false,
                api_error: None,
            },

            EditorIntent::Close => EditorState::Hidden,

            EditorIntent::FocusNext => edit(state, |form| form.focus_next()),
            EditorIntent::FocusPrev => edit(state, |form| form.focus_prev()),
            EditorIntent::Input(c) => edit(state, move |form| form.insert_char(c)),
            EditorIntent::Backspace => edit(state, |form| form.backspace()),
            EditorIntent::Paste(text) => edit(state, move |form| form.paste(&text)),
            EditorIntent::CategoryCursorLeft { count } => {
                edit(state, move |form| form.move_category_cursor(-1, count))
            }
            EditorIntent::CategoryCursorRight { count } => {
                edit(state, move |form| form.move_category_cursor(1, count))
            }
            EditorIntent::ToggleCategory { id } => {
                edit(state, move |form| form.toggle_category(id))
            }

            EditorIntent::Rejected { error } => {
                edit(state, move |form| form.error = Some(error))
            }

            EditorIntent::SubmitStarted => match state {
                EditorState::Visible { id, form, .. } => EditorState::Visible {
                    id,
                    form,
                    submitting: true,
                    api_error: None,
                },
                EditorState::Hidden => EditorState::Hidden,
            },

            EditorIntent::SubmitFinished { outcome } => match state {
                EditorState::Visible { id, form, .. } => match outcome {
                    Ok(()) => EditorState::Hidden,
                    Err(message) => EditorState::Visible {
                        id,
                        form,
                        submitting: false,
                        api_error: Some(message),
                    },
                },
                EditorState::Hidden => EditorState::Hidden,
            },
        }
    }
}

/// Applies a form edit when the dialog is open and idle.
fn edit(state: EditorState, apply: impl FnOnce(&mut PostForm)) -> EditorState {
    match state {
        EditorState::Visible {
            id,
            mut form,
            submitting: false,
            api_error,
        } => {
            apply(&mut form);
            EditorState::Visible {
                id,
                form,
                submitting: false,
                api_error,
            }
        }
        other => other,
    }
}
