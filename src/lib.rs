//! Terminal client for a hosted microblog service.
//!
//! The crate splits into a thin HTTP client ([`api`]), pure validation
//! rules ([`validate`]), a shared snapshot store ([`store`]), and a
//! ratatui front end ([`ui`]) glued to the async side by [`bridge`].

pub mod api;
pub mod args;
pub mod bridge;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
pub mod validate;
