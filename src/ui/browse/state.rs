use crate::api::{Category, CategoryId, Post};
use crate::store::BlogSnapshot;

/// Selection and filter state for the post list.
///
/// The visible list is derived on demand from the latest snapshot: newest
/// post first, narrowed by the category filter. `selected` indexes into
/// that derived list, never into the raw snapshot order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseState {
    selected: usize,
    filter: Vec<CategoryId>,
    filter_cursor: usize,
    filter_focused: bool,
}

impl BrowseState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn filter(&self) -> &[CategoryId] {
        &self.filter
    }

    pub fn filter_focused(&self) -> bool {
        self.filter_focused
    }

    pub fn filter_cursor(&self) -> usize {
        self.filter_cursor
    }

    /// Posts to draw, newest first. An empty filter shows everything;
    /// otherwise a post matches when it carries any selected category.
    pub fn visible_posts<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts
            .iter()
            .rev()
            .filter(|post| self.filter.is_empty() || post.has_any_category(&self.filter))
            .collect()
    }

    pub fn selected_post<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        self.visible_posts(posts).get(self.selected).copied()
    }

    /// Moves the selection up or down, wrapping at either end of the
    /// visible list.
    pub fn move_selection(&mut self, direction: i32, visible: usize) {
        if visible == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(visible - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                visible - 1
            } else {
                current - 1
            }
        } else if current + 1 >= visible {
            0
        } else {
            current + 1
        };
    }

    pub fn toggle_filter_focus(&mut self) {
        self.filter_focused = !self.filter_focused;
    }

    pub fn move_filter_cursor(&mut self, direction: i32, count: usize) {
        if count == 0 {
            self.filter_cursor = 0;
            return;
        }
        let current = self.filter_cursor.min(count - 1);
        self.filter_cursor = if direction.is_negative() {
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

    /// Toggles the category under the filter cursor in or out of the
    /// filter set.
    pub fn toggle_filter(&mut self, categories: &[Category]) {
        let Some(category) = categories.get(self.filter_cursor) else {
            return;
        };
        match self.filter.iter().position(|id| *id == category.id) {
            Some(index) => {
                self.filter.remove(index);
            }
            None => self.filter.push(category.id),
        }
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Reconciles with a fresh snapshot: drops filter entries whose
    /// category no longer exists and clamps both cursors into range.
    pub fn sync(&mut self, snapshot: &BlogSnapshot) {
        self.filter
            .retain(|id| snapshot.categories.iter().any(|category| category.id == *id));

        if snapshot.categories.is_empty() {
            self.filter_cursor = 0;
            self.filter_focused = false;
        } else {
            self.filter_cursor = self.filter_cursor.min(snapshot.categories.len() - 1);
        }

        let visible = self.visible_posts(&snapshot.posts).len();
        self.selected = if visible == 0 {
            0
        } else {
            self.selected.min(visible - 1)
        };
    }
}
