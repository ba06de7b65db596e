//! HTTP client for the remote blog service.

mod client;
mod error;
mod types;

pub use client::BlogClient;
pub use error::ApiError;
pub use types::{Category, CategoryId, Post, PostDraft, PostId};
