//! Shared blog state, the single source of truth for categories and posts.

mod state;

pub use state::{BlogSnapshot, BlogStore};
