//! Delete-confirmation dialog feature module.
//!
//! Cancel is pre-selected so a double Enter never deletes by accident.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_confirm_dialog;
pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::ConfirmState;
