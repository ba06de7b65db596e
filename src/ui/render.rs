use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::api::{Category, Post};
use crate::ui::app::App;
use crate::ui::browse::BrowseState;
use crate::ui::category::render_category_dialog;
use crate::ui::compose::render_compose_dialog;
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::editor::render_editor_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT};
use crate::ui::truncate_text;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);
    let snapshot = app.snapshot();

    let header = Header::new();
    frame.render_widget(
        header.widget(
            header_area,
            app.api_host(),
            snapshot.is_loading,
            app.animation_tick(),
            app.status_message(),
        ),
        header_area,
    );

    draw_browse(frame, app, body);

    let footer = Footer::new();
    frame.render_widget(footer.widget(footer_area, app.key_hints()), footer_area);

    render_compose_dialog(frame, app.compose(), &snapshot.categories);
    render_editor_dialog(frame, app.editor(), &snapshot.categories);
    render_category_dialog(frame, app.category_dialog());
    render_confirm_dialog(frame, app.confirm());
}

fn draw_browse(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);
    let filter_area = regions[0];
    let list_area = regions[1];

    let snapshot = app.snapshot();
    let browse = app.browse();

    frame.render_widget(
        Paragraph::new(filter_line(browse, &snapshot.categories)),
        filter_area,
    );

    let visible = browse.visible_posts(&snapshot.posts);
    if visible.is_empty() {
        let message = if snapshot.is_loading {
            "Loading posts..."
        } else if browse.filter().is_empty() {
            "No posts available. Create a new post to get started."
        } else {
            "No posts available with selected categories."
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {message}"),
                Style::default().add_modifier(Modifier::DIM),
            ))),
            list_area,
        );
        return;
    }

    let width = (list_area.width as usize).saturating_sub(4);
    let items: Vec<ListItem<'static>> = visible
        .iter()
        .map(|post| post_item(post, width))
        .collect();
    let list = List::new(items).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default().with_selected(Some(browse.selected()));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn filter_line(browse: &BrowseState, categories: &[Category]) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "  Filter: ",
        Style::default().fg(HEADER_SEPARATOR),
    )];

    if categories.is_empty() {
        spans.push(Span::styled(
            "no categories yet",
            Style::default().add_modifier(Modifier::DIM),
        ));
        return Line::from(spans);
    }

    for (idx, category) in categories.iter().enumerate() {
        let checked = browse.filter().contains(&category.id);
        let mark = if checked { "[x] " } else { "[ ] " };
        let mut style = if checked {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        if browse.filter_focused() && idx == browse.filter_cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{mark}{}", category.name), style));
        spans.push(Span::raw("  "));
    }

    if browse.filter().is_empty() {
        spans.push(Span::styled(
            "(showing all)",
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    Line::from(spans)
}

fn post_item(post: &Post, width: usize) -> ListItem<'static> {
    let categories = post
        .categories
        .iter()
        .map(|category| category.name.as_str())
        .collect::<Vec<_>>()
        .join(" · ");

    ListItem::new(vec![
        Line::from(Span::styled(
            format!("  {}", truncate_text(&post.title, width)),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", truncate_text(&post.content, width)),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            format!("  {categories}"),
            Style::default().fg(HEADER_SEPARATOR),
        )),
        Line::from(""),
    ])
}
