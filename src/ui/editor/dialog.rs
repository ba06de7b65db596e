//! Rendering for the edit-post dialog.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::api::Category;
use crate::ui::form::{error_line, form_lines};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER};
use crate::ui::truncate_text;

use super::state::EditorState;

const DIALOG_WIDTH: u16 = 62;

/// Render the edit-post dialog overlay.
pub fn render_editor_dialog(frame: &mut Frame, state: &EditorState, categories: &[Category]) {
    let EditorState::Visible {
        form,
        submitting,
        api_error,
        ..
    } = state
    else {
        return;
    };

    let mut lines = form_lines(form, categories);
    lines.push(Line::from(""));
    lines.push(action_line(*submitting));
    if let Some(message) = api_error {
        lines.push(error_line(truncate_text(message, DIALOG_WIDTH as usize - 8)));
    }
    lines.push(Line::from(""));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(DIALOG_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Edit Post ")
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
            "  Saving...",
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "[ Save ]",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter saves", Style::default().add_modifier(Modifier::DIM)),
        ])
    }
}
