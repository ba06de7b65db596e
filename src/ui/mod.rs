//! Terminal front end: ratatui rendering, key routing, and the MVI
//! state machines behind each dialog.

pub mod app;
pub mod browse;
pub mod category;
pub mod compose;
pub mod confirm;
pub mod editor;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

/// Shortens `text` to at most `max` characters, appending `...` when it
/// had to cut. Counts characters, not bytes, so multibyte input never
/// splits mid-glyph.
pub(crate) fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
