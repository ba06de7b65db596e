//! Post list selection and category filtering for the main view.

mod state;

pub use state::BrowseState;
