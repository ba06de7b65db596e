//! Rendering for the delete-confirmation dialog.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};
use crate::ui::truncate_text;

use super::state::ConfirmState;

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 7;

/// Render the delete-confirmation dialog overlay.
pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmState) {
    let ConfirmState::Visible {
        title,
        cancel_selected,
        pending,
        ..
    } = state
    else {
        return;
    };

    let prompt = format!(
        "  Delete \"{}\"?",
        truncate_text(title, DIALOG_WIDTH as usize - 14)
    );
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(prompt, Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        if *pending {
            Line::from(Span::styled(
                "  Deleting...",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            render_buttons(*cancel_selected)
        },
    ];

    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Post ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_buttons(cancel_selected: bool) -> Line<'static> {
    let delete_style = if cancel_selected {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    };

    let cancel_style = if cancel_selected {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    Line::from(vec![
        Span::raw("          "),
        Span::styled(" Delete ", delete_style),
        Span::raw("    "),
        Span::styled(" Cancel ", cancel_style),
    ])
}
