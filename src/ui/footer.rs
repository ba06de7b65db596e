use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left, crate version on the right.
    pub fn widget(&self, area: Rect, hints: &str) -> Paragraph<'static> {
        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let left = format!(" {hints}");
        let right = format!("v{VERSION} ");
        let inner_width = area.width.saturating_sub(2) as usize;
        let padding =
            inner_width.saturating_sub(left.chars().count() + right.chars().count());

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(" ".repeat(padding), style),
            Span::styled(right, style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
