//! Rendering for the new-category dialog.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::form::error_line;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER};
use crate::ui::truncate_text;

use super::state::CategoryDialogState;

const DIALOG_WIDTH: u16 = 46;

/// Render the new-category dialog overlay. Drawn after the post dialogs so
/// it stacks on top when opened from inside one.
pub fn render_category_dialog(frame: &mut Frame, state: &CategoryDialogState) {
    let CategoryDialogState::Visible {
        name,
        error,
        submitting,
    } = state
    else {
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Name",
            Style::default().fg(HEADER_SEPARATOR),
        )),
        Line::from(Span::styled(
            format!("  {name}█"),
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    if let Some(message) = error {
        lines.push(error_line(truncate_text(message, DIALOG_WIDTH as usize - 8)));
    }
    lines.push(Line::from(""));
    lines.push(action_line(*submitting));
    lines.push(Line::from(""));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(DIALOG_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Category ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn action_line(submitting: bool) -> Line<'static> {
    if submitting {
        Line::from(Span::styled(
            "  Creating...",
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "[ Create ]",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter submits", Style::default().add_modifier(Modifier::DIM)),
        ])
    }
}
