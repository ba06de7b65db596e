use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, DialogKind, Focus};
use crate::ui::category::CategoryIntent;
use crate::ui::compose::ComposeIntent;
use crate::ui::confirm::ConfirmIntent;
use crate::ui::editor::EditorIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Browse => browse_key(app, key),
        Focus::Dialog(DialogKind::Compose) => compose_key(app, key),
        Focus::Dialog(DialogKind::Editor) => editor_key(app, key),
        Focus::Dialog(DialogKind::Category) => category_key(app, key),
        Focus::Dialog(DialogKind::Confirm) => confirm_key(app, key),
    }
}

fn browse_key(app: &mut App, key: KeyEvent) {
    if app.browse().filter_focused() {
        match key.code {
            KeyCode::Left => app.move_filter_cursor(-1),
            KeyCode::Right => app.move_filter_cursor(1),
            KeyCode::Char(' ') => app.toggle_filter_at_cursor(),
            KeyCode::Char('c') => app.clear_filter(),
            KeyCode::Char('f') | KeyCode::Esc => app.toggle_filter_focus(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char('n') => app.open_compose(),
        KeyCode::Char('u') => app.open_editor(),
        KeyCode::Char('d') => app.open_confirm(),
        KeyCode::Char('f') => app.toggle_filter_focus(),
        KeyCode::Char('k') => app.open_category_dialog(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn compose_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'k') {
        app.open_category_dialog();
        return;
    }

    let on_categories = app.form_categories_focused();
    match key.code {
        KeyCode::Esc => app.close_compose(),
        KeyCode::Enter => app.submit_compose(),
        KeyCode::Tab => app.dispatch_compose(ComposeIntent::FocusNext),
        KeyCode::BackTab => app.dispatch_compose(ComposeIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_compose(ComposeIntent::Backspace),
        KeyCode::Left if on_categories => {
            let count = app.snapshot().categories.len();
            app.dispatch_compose(ComposeIntent::CategoryCursorLeft { count });
        }
        KeyCode::Right if on_categories => {
            let count = app.snapshot().categories.len();
            app.dispatch_compose(ComposeIntent::CategoryCursorRight { count });
        }
        KeyCode::Char(' ') if on_categories => app.toggle_compose_category(),
        KeyCode::Char(c) => app.dispatch_compose(ComposeIntent::Input(c)),
        _ => {}
    }
}

fn editor_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'k') {
        app.open_category_dialog();
        return;
    }

    let on_categories = app.form_categories_focused();
    match key.code {
        KeyCode::Esc => app.close_editor(),
        KeyCode::Enter => app.submit_editor(),
        KeyCode::Tab => app.dispatch_editor(EditorIntent::FocusNext),
        KeyCode::BackTab => app.dispatch_editor(EditorIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
        KeyCode::Left if on_categories => {
            let count = app.snapshot().categories.len();
            app.dispatch_editor(EditorIntent::CategoryCursorLeft { count });
        }
        KeyCode::Right if on_categories => {
            let count = app.snapshot().categories.len();
            app.dispatch_editor(EditorIntent::CategoryCursorRight { count });
        }
        KeyCode::Char(' ') if on_categories => app.toggle_editor_category(),
        KeyCode::Char(c) => app.dispatch_editor(EditorIntent::Input(c)),
        _ => {}
    }
}

fn category_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_category_dialog(),
        KeyCode::Enter => app.submit_category(),
        KeyCode::Backspace => app.dispatch_category(CategoryIntent::Backspace),
        KeyCode::Char(c) => app.dispatch_category(CategoryIntent::Input(c)),
        _ => {}
    }
}

fn confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_confirm(),
        KeyCode::Left => app.dispatch_confirm(ConfirmIntent::SelectDelete),
        KeyCode::Right => app.dispatch_confirm(ConfirmIntent::SelectCancel),
        KeyCode::Enter => app.confirm_choice(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
