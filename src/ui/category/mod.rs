//! New-category dialog feature module.
//!
//! A single-input modal reachable from the browse view and from inside
//! either post form, so a missing category can be added without losing the
//! draft underneath.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_category_dialog;
pub use intent::CategoryIntent;
pub use reducer::CategoryReducer;
pub use state::CategoryDialogState;
