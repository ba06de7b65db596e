//! New-post dialog feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Dialog state enum
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering
//!
//! The dialog stays open after a successful create so several posts can be
//! written in a row; a short success notice shows between them.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_compose_dialog;
pub use intent::ComposeIntent;
pub use reducer::ComposeReducer;
pub use state::ComposeState;
