//! Model-View-Intent (MVI) primitives.
//!
//! Every dialog and the browse screen keep their state in a value type,
//! change it only through a reducer, and leave side effects (store
//! commands, channel sends) to the app layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
