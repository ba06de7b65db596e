use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use crate::ui::truncate_text;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// One-line status bar: app name, API host, load state on the left and
    /// the current error banner (if any) on the right.
    pub fn widget(
        &self,
        area: Rect,
        host: &str,
        loading: bool,
        animation_tick: u8,
        status: Option<&str>,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "termpost",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(host.to_string(), text_style),
            Span::styled("  │  ", separator_style),
        ];
        if loading {
            let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!("{spinner} Loading..."),
                Style::default().fg(STATUS_OK),
            ));
        } else {
            spans.push(Span::styled("● Ready", Style::default().fg(STATUS_OK)));
        }

        if let Some(message) = status {
            let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
            let width = area.width as usize;
            let message = truncate_text(message, width.saturating_sub(used + 4));
            let padding = width.saturating_sub(used + message.chars().count() + 1);
            spans.push(Span::styled(" ".repeat(padding), text_style));
            spans.push(Span::styled(message, Style::default().fg(STATUS_ERROR)));
            spans.push(Span::styled(" ", text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
