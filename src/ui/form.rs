//! Shared editing state for the post dialogs.
//!
//! Compose and edit share the same three inputs, the same focus cycle and
//! the same validation, so both dialog states embed a [`PostForm`]. All
//! edits go through methods: an edit to a field clears a validation error
//! that points at that field, and only that one.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::api::{Category, CategoryId, Post, PostDraft};
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use crate::validate::{self, PostDraftError, PostField};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub selected: Vec<CategoryId>,
    pub focused: PostField,
    pub category_cursor: usize,
    pub error: Option<PostDraftError>,
}

impl PostForm {
    /// Form pre-populated from an existing post, for the edit dialog.
    pub fn prefilled(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            selected: post.categories.iter().map(|category| category.id).collect(),
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            PostField::Title => PostField::Content,
            PostField::Content => PostField::Categories,
            PostField::Categories => PostField::Title,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focused = match self.focused {
            PostField::Title => PostField::Categories,
            PostField::Content => PostField::Title,
            PostField::Categories => PostField::Content,
        };
    }

    pub fn insert_char(&mut self, c: char) {
        match self.focused {
            PostField::Title => self.title.push(c),
            PostField::Content => self.content.push(c),
            PostField::Categories => return,
        }
        self.clear_field_error(self.focused);
    }

    pub fn backspace(&mut self) {
        match self.focused {
            PostField::Title => {
                self.title.pop();
            }
            PostField::Content => {
                self.content.pop();
            }
            PostField::Categories => return,
        }
        self.clear_field_error(self.focused);
    }

    /// Pasted text lands in the focused field with newlines flattened to
    /// spaces; both fields are single-line.
    pub fn paste(&mut self, text: &str) {
        let flattened = text.replace('\r', "").replace('\n', " ");
        match self.focused {
            PostField::Title => self.title.push_str(&flattened),
            PostField::Content => self.content.push_str(&flattened),
            PostField::Categories => return,
        }
        self.clear_field_error(self.focused);
    }

    /// Moves the category cursor left or right, wrapping at either end.
    pub fn move_category_cursor(&mut self, direction: i32, count: usize) {
        if count == 0 {
            self.category_cursor = 0;
            return;
        }
        let current = self.category_cursor.min(count - 1);
        self.category_cursor = if direction.is_negative() {
            if current == 0 {
                count - 1
            } else {
                current - 1
            }
        } else if current + 1 >= count {
            0
        } else {
            current + 1
        };
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        match self.selected.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(id),
        }
        self.clear_field_error(PostField::Categories);
    }

    /// Runs the draft rules and returns the submittable draft on success.
    pub fn validate(&self) -> Result<PostDraft, PostDraftError> {
        validate::post_draft(&self.title, &self.content, &self.selected)?;
        Ok(PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            categories: self.selected.clone(),
        })
    }

    fn clear_field_error(&mut self, field: PostField) {
        if self.error.map(PostDraftError::field) == Some(field) {
            self.error = None;
        }
    }
}

/// Lines for the three form fields, with any validation error rendered
/// under the input it belongs to. Shared by the compose and edit dialogs.
pub fn form_lines(form: &PostForm, categories: &[Category]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    lines.push(field_label("Title", form.focused == PostField::Title));
    lines.push(field_value(&form.title, form.focused == PostField::Title));
    if let Some(error) = form.error.filter(|error| error.field() == PostField::Title) {
        lines.push(error_line(error.to_string()));
    }
    lines.push(Line::from(""));

    lines.push(field_label("Content", form.focused == PostField::Content));
    lines.push(field_value(&form.content, form.focused == PostField::Content));
    if let Some(error) = form.error.filter(|error| error.field() == PostField::Content) {
        lines.push(error_line(error.to_string()));
    }
    lines.push(Line::from(""));

    lines.push(field_label("Categories", form.focused == PostField::Categories));
    lines.push(category_chips(form, categories));
    if let Some(error) = form.error.filter(|error| error.field() == PostField::Categories) {
        lines.push(error_line(error.to_string()));
    }

    lines
}

pub(crate) fn error_line(message: String) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {message}"),
        Style::default().fg(STATUS_ERROR),
    ))
}

fn field_label(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_SEPARATOR)
    };
    Line::from(Span::styled(format!("  {label}"), style))
}

fn field_value(value: &str, focused: bool) -> Line<'static> {
    // Keep the end of long values in view; editing happens at the end.
    const VISIBLE: usize = 54;
    let count = value.chars().count();
    let shown: String = if count > VISIBLE {
        let tail: String = value.chars().skip(count - VISIBLE).collect();
        format!("…{tail}")
    } else {
        value.to_string()
    };

    if focused {
        Line::from(Span::styled(
            format!("  {shown}█"),
            Style::default().fg(HEADER_TEXT),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {shown}"),
            Style::default().add_modifier(Modifier::DIM),
        ))
    }
}

fn category_chips(form: &PostForm, categories: &[Category]) -> Line<'static> {
    if categories.is_empty() {
        return Line::from(Span::styled(
            "  No categories yet. Press Ctrl+K to add one.".to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    let focused = form.focused == PostField::Categories;
    let mut spans = vec![Span::raw("  ")];
    for (index, category) in categories.iter().enumerate() {
        let selected = form.selected.contains(&category.id);
        let marker = if selected { "[x]" } else { "[ ]" };
        let mut style = Style::default();
        if selected {
            style = style.fg(ACCENT);
        }
        if focused && index == form.category_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{marker} {}", category.name), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}
