//! Edit-post dialog feature module.
//!
//! Same MVI layout as `compose`, but the form opens pre-populated from the
//! selected post and a successful save closes the dialog. Updates are full
//! replacements, so the whole form is submitted every time.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_editor_dialog;
pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::EditorState;
