use tracing::warn;

use crate::bridge::{CommandSender, MutationKind, StoreCommand};
use crate::config::Config;
use crate::store::{BlogSnapshot, BlogStore};
use crate::ui::browse::BrowseState;
use crate::ui::category::{CategoryDialogState, CategoryIntent, CategoryReducer};
use crate::ui::compose::{ComposeIntent, ComposeReducer, ComposeState};
use crate::ui::confirm::{ConfirmIntent, ConfirmReducer, ConfirmState};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};
use crate::ui::mvi::Reducer;
use crate::validate::{self, PostField};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DialogKind {
    Compose,
    Editor,
    Category,
    Confirm,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Browse,
    Dialog(DialogKind),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    store: BlogStore,
    /// Last snapshot read from the store; refreshed on `StateRefreshed`.
    snapshot: BlogSnapshot,
    browse: BrowseState,
    /// Dialog states (MVI pattern).
    compose: ComposeState,
    editor: EditorState,
    category: CategoryDialogState,
    confirm: ConfirmState,
    /// Where focus returns when the category modal closes.
    category_origin: Option<DialogKind>,
    commands: CommandSender,
    /// Banner error shown in the header until the next successful refresh.
    status: Option<String>,
    animation_tick: u8,
    /// Duration of the compose success notice, in ticks.
    flash_ticks: u16,
    api_host: String,
}

impl App {
    pub fn new(config: &Config, store: BlogStore, commands: CommandSender) -> Self {
        let snapshot = store.snapshot();
        let tick_ms = config.ui.tick_ms.max(1);
        let flash_ticks = config
            .ui
            .flash_ms
            .div_ceil(tick_ms)
            .clamp(1, u64::from(u16::MAX)) as u16;

        Self {
            should_quit: false,
            focus: Focus::Browse,
            store,
            snapshot,
            browse: BrowseState::default(),
            compose: ComposeState::default(),
            editor: EditorState::default(),
            category: CategoryDialogState::default(),
            confirm: ConfirmState::default(),
            category_origin: None,
            commands,
            status: None,
            animation_tick: 0,
            flash_ticks,
            api_host: host_of(&config.api.base_url),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn snapshot(&self) -> &BlogSnapshot {
        &self.snapshot
    }

    pub fn browse(&self) -> &BrowseState {
        &self.browse
    }

    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn category_dialog(&self) -> &CategoryDialogState {
        &self.category
    }

    pub fn confirm(&self) -> &ConfirmState {
        &self.confirm
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_loading
    }

    /// Footer hints for the focused surface.
    pub fn key_hints(&self) -> &'static str {
        match self.focus {
            Focus::Browse if self.browse.filter_focused() => {
                "←/→ Move │ Space Toggle │ c Clear │ f Done"
            }
            Focus::Browse => {
                "↑/↓ Select │ n New │ u Update │ d Delete │ f Filter │ k Category │ r Refresh │ q Quit"
            }
            Focus::Dialog(DialogKind::Compose) | Focus::Dialog(DialogKind::Editor) => {
                "Tab Next field │ Space Toggle category │ Enter Submit │ Ctrl+K New category │ Esc Close"
            }
            Focus::Dialog(DialogKind::Category) => "Enter Create │ Esc Close",
            Focus::Dialog(DialogKind::Confirm) => "←/→ Choose │ Enter Confirm │ Esc Cancel",
        }
    }

    // ========================================================================
    // Events from the runtime loop
    // ========================================================================

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.dispatch_compose(ComposeIntent::Tick);
    }

    /// A refresh landed: re-read the snapshot and reconcile cursors. Fresh
    /// data also retires any stale error banner.
    pub fn on_state_refreshed(&mut self) {
        self.snapshot = self.store.snapshot();
        self.browse.sync(&self.snapshot);
        self.status = None;
    }

    pub fn on_refresh_failed(&mut self, message: String) {
        self.status = Some(message);
    }

    /// A mutation outcome arrived from the store worker. Routed to the
    /// dialog that started it; if that dialog is already gone, a failure
    /// still surfaces in the header banner.
    pub fn on_mutation(&mut self, kind: MutationKind, outcome: Result<(), String>) {
        match kind {
            MutationKind::CreateCategory => {
                if self.category.is_visible() {
                    self.dispatch_category(CategoryIntent::SubmitFinished { outcome });
                    if !self.category.is_visible() {
                        self.restore_category_focus();
                    }
                } else if let Err(message) = outcome {
                    self.status = Some(message);
                }
            }
            MutationKind::CreatePost => {
                if self.compose.is_visible() {
                    let flash_ticks = self.flash_ticks;
                    self.dispatch_compose(ComposeIntent::SubmitFinished {
                        outcome,
                        flash_ticks,
                    });
                } else if let Err(message) = outcome {
                    self.status = Some(message);
                }
            }
            MutationKind::UpdatePost => {
                if self.editor.is_visible() {
                    self.dispatch_editor(EditorIntent::SubmitFinished { outcome });
                    if !self.editor.is_visible()
                        && self.focus == Focus::Dialog(DialogKind::Editor)
                    {
                        self.focus = Focus::Browse;
                    }
                } else if let Err(message) = outcome {
                    self.status = Some(message);
                }
            }
            MutationKind::DeletePost => {
                self.dispatch_confirm(ConfirmIntent::Finished);
                if self.focus == Focus::Dialog(DialogKind::Confirm) {
                    self.focus = Focus::Browse;
                }
                if let Err(message) = outcome {
                    self.status = Some(message);
                }
            }
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Dialog(DialogKind::Compose) => {
                self.dispatch_compose(ComposeIntent::Paste(text.to_string()));
            }
            Focus::Dialog(DialogKind::Editor) => {
                self.dispatch_editor(EditorIntent::Paste(text.to_string()));
            }
            Focus::Dialog(DialogKind::Category) => {
                self.dispatch_category(CategoryIntent::Paste(text.to_string()));
            }
            Focus::Dialog(DialogKind::Confirm) | Focus::Browse => {}
        }
    }

    // ========================================================================
    // Browse view
    // ========================================================================

    pub fn request_refresh(&mut self) {
        self.send_command(StoreCommand::RefreshAll);
    }

    pub fn move_selection(&mut self, direction: i32) {
        let visible = self.browse.visible_posts(&self.snapshot.posts).len();
        self.browse.move_selection(direction, visible);
    }

    pub fn toggle_filter_focus(&mut self) {
        self.browse.toggle_filter_focus();
    }

    pub fn move_filter_cursor(&mut self, direction: i32) {
        let count = self.snapshot.categories.len();
        self.browse.move_filter_cursor(direction, count);
    }

    pub fn toggle_filter_at_cursor(&mut self) {
        self.browse.toggle_filter(&self.snapshot.categories);
        // Narrowing the list can strand the selection past the end.
        self.browse.sync(&self.snapshot);
    }

    pub fn clear_filter(&mut self) {
        self.browse.clear_filter();
        self.browse.sync(&self.snapshot);
    }

    // ========================================================================
    // New-post dialog (MVI pattern)
    // ========================================================================

    pub fn dispatch_compose(&mut self, intent: ComposeIntent) {
        dispatch_mvi!(self, compose, ComposeReducer, intent);
    }

    pub fn open_compose(&mut self) {
        self.dispatch_compose(ComposeIntent::Open);
        self.focus = Focus::Dialog(DialogKind::Compose);
    }

    pub fn close_compose(&mut self) {
        self.dispatch_compose(ComposeIntent::Close);
        self.focus = Focus::Browse;
    }

    /// Validates the draft and, when it passes, hands a create command to
    /// the store worker. A rejected draft never leaves the process.
    pub fn submit_compose(&mut self) {
        let validated = match &self.compose {
            ComposeState::Visible {
                form,
                submitting: false,
                ..
            } => form.validate(),
            _ => return,
        };
        match validated {
            Ok(draft) => {
                if self.send_command(StoreCommand::CreatePost { draft }) {
                    self.dispatch_compose(ComposeIntent::SubmitStarted);
                }
            }
            Err(error) => self.dispatch_compose(ComposeIntent::Rejected { error }),
        }
    }

    pub fn toggle_compose_category(&mut self) {
        let cursor = match &self.compose {
            ComposeState::Visible {
                form,
                submitting: false,
                ..
            } => form.category_cursor,
            _ => return,
        };
        let Some(id) = self.snapshot.categories.get(cursor).map(|c| c.id) else {
            return;
        };
        self.dispatch_compose(ComposeIntent::ToggleCategory { id });
    }

    // ========================================================================
    // Edit-post dialog (MVI pattern)
    // ========================================================================

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    /// Opens the editor for the selected post, if any.
    pub fn open_editor(&mut self) {
        let Some(post) = self.browse.selected_post(&self.snapshot.posts).cloned() else {
            return;
        };
        self.dispatch_editor(EditorIntent::Open { post });
        self.focus = Focus::Dialog(DialogKind::Editor);
    }

    pub fn close_editor(&mut self) {
        self.dispatch_editor(EditorIntent::Close);
        self.focus = Focus::Browse;
    }

    pub fn submit_editor(&mut self) {
        let (id, validated) = match &self.editor {
            EditorState::Visible {
                id,
                form,
                submitting: false,
                ..
            } => (*id, form.validate()),
            _ => return,
        };
        match validated {
            Ok(draft) => {
                if self.send_command(StoreCommand::UpdatePost { id, draft }) {
                    self.dispatch_editor(EditorIntent::SubmitStarted);
                }
            }
            Err(error) => self.dispatch_editor(EditorIntent::Rejected { error }),
        }
    }

    pub fn toggle_editor_category(&mut self) {
        let cursor = match &self.editor {
            EditorState::Visible {
                form,
                submitting: false,
                ..
            } => form.category_cursor,
            _ => return,
        };
        let Some(id) = self.snapshot.categories.get(cursor).map(|c| c.id) else {
            return;
        };
        self.dispatch_editor(EditorIntent::ToggleCategory { id });
    }

    /// True when the focused post form has its category row selected, so
    /// the input layer can route Space and the arrow keys there.
    pub fn form_categories_focused(&self) -> bool {
        let form = match self.focus {
            Focus::Dialog(DialogKind::Compose) => self.compose.form(),
            Focus::Dialog(DialogKind::Editor) => self.editor.form(),
            _ => None,
        };
        form.map(|form| form.focused == PostField::Categories)
            .unwrap_or(false)
    }

    // ========================================================================
    // New-category dialog (MVI pattern)
    // ========================================================================

    pub fn dispatch_category(&mut self, intent: CategoryIntent) {
        dispatch_mvi!(self, category, CategoryReducer, intent);
    }

    /// Opens the category modal, remembering which dialog (if any) it was
    /// opened over so focus can return there.
    pub fn open_category_dialog(&mut self) {
        self.category_origin = match self.focus {
            Focus::Dialog(DialogKind::Compose) => Some(DialogKind::Compose),
            Focus::Dialog(DialogKind::Editor) => Some(DialogKind::Editor),
            _ => None,
        };
        self.dispatch_category(CategoryIntent::Open);
        self.focus = Focus::Dialog(DialogKind::Category);
    }

    pub fn close_category_dialog(&mut self) {
        self.dispatch_category(CategoryIntent::Close);
        self.restore_category_focus();
    }

    /// Validates the typed name against the categories already known and,
    /// when it passes, hands a create command to the store worker.
    /// Duplicates are caught here, before any network traffic.
    pub fn submit_category(&mut self) {
        let name = match &self.category {
            CategoryDialogState::Visible {
                name,
                submitting: false,
                ..
            } => name.clone(),
            _ => return,
        };
        match validate::category_name(&name, &self.snapshot.categories) {
            Ok(()) => {
                if self.send_command(StoreCommand::CreateCategory { name }) {
                    self.dispatch_category(CategoryIntent::SubmitStarted);
                }
            }
            Err(error) => self.dispatch_category(CategoryIntent::Rejected {
                message: error.to_string(),
            }),
        }
    }

    // ========================================================================
    // Delete-confirmation dialog (MVI pattern)
    // ========================================================================

    pub fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    /// Opens the confirmation for the selected post, if any.
    pub fn open_confirm(&mut self) {
        let Some(post) = self.browse.selected_post(&self.snapshot.posts) else {
            return;
        };
        let (id, title) = (post.id, post.title.clone());
        self.dispatch_confirm(ConfirmIntent::Open { id, title });
        self.focus = Focus::Dialog(DialogKind::Confirm);
    }

    pub fn close_confirm(&mut self) {
        self.dispatch_confirm(ConfirmIntent::Close);
        self.focus = Focus::Browse;
    }

    /// Enter inside the confirmation: acts on whichever button is
    /// highlighted. Cancel starts highlighted, so a stray double Enter
    /// closes the dialog instead of deleting.
    pub fn confirm_choice(&mut self) {
        let (id, cancel_selected, pending) = match &self.confirm {
            ConfirmState::Visible {
                id,
                cancel_selected,
                pending,
                ..
            } => (*id, *cancel_selected, *pending),
            ConfirmState::Hidden => return,
        };
        if pending {
            return;
        }
        if cancel_selected {
            self.close_confirm();
            return;
        }
        if self.send_command(StoreCommand::DeletePost { id }) {
            self.dispatch_confirm(ConfirmIntent::DeleteStarted);
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn restore_category_focus(&mut self) {
        self.focus = match self.category_origin.take() {
            Some(DialogKind::Compose) if self.compose.is_visible() => {
                Focus::Dialog(DialogKind::Compose)
            }
            Some(DialogKind::Editor) if self.editor.is_visible() => {
                Focus::Dialog(DialogKind::Editor)
            }
            _ => Focus::Browse,
        };
    }

    fn send_command(&mut self, command: StoreCommand) -> bool {
        match self.commands.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "store command dropped");
                self.status = Some("Action dropped: the store worker is busy".to_string());
                false
            }
        }
    }
}

/// Host portion of the API base URL, for the header.
fn host_of(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    let without_scheme = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BlogClient, Category, CategoryId, Post, PostId};
    use tokio::sync::mpsc::error::TryRecvError;
    use tokio::sync::mpsc::{self, Receiver};

    fn make_app() -> (App, Receiver<StoreCommand>) {
        make_app_with_capacity(16)
    }

    fn make_app_with_capacity(capacity: usize) -> (App, Receiver<StoreCommand>) {
        let config = Config::default();
        let store = BlogStore::new(BlogClient::new(&config.api));
        let (tx, rx) = mpsc::channel(capacity);
        (App::new(&config, store, tx), rx)
    }

    fn seed_categories(app: &mut App, names: &[&str]) {
        app.snapshot.categories = names
            .iter()
            .enumerate()
            .map(|(index, name)| Category {
                id: CategoryId(index as u64 + 1),
                name: name.to_string(),
            })
            .collect();
    }

    fn seed_posts(app: &mut App, titles: &[&str]) {
        let tag = Category {
            id: CategoryId(1),
            name: "Tech".to_string(),
        };
        app.snapshot.posts = titles
            .iter()
            .enumerate()
            .map(|(index, title)| Post {
                id: PostId(index as u64 + 1),
                title: title.to_string(),
                content: "body".to_string(),
                categories: vec![tag.clone()],
            })
            .collect();
    }

    // -- focus and dialog lifecycle ----------------------------------------

    #[test]
    fn starts_browsing_and_loading() {
        let (app, _rx) = make_app();
        assert_eq!(app.focus(), Focus::Browse);
        assert!(app.is_loading());
        assert!(!app.should_quit());
    }

    #[test]
    fn compose_open_close_moves_focus() {
        let (mut app, _rx) = make_app();
        app.open_compose();
        assert_eq!(app.focus(), Focus::Dialog(DialogKind::Compose));
        assert!(app.compose().is_visible());

        app.close_compose();
        assert_eq!(app.focus(), Focus::Browse);
        assert!(!app.compose().is_visible());
    }

    #[test]
    fn editor_needs_a_selected_post() {
        let (mut app, _rx) = make_app();
        app.open_editor();
        assert_eq!(app.focus(), Focus::Browse);

        seed_posts(&mut app, &["first", "second"]);
        app.open_editor();
        assert_eq!(app.focus(), Focus::Dialog(DialogKind::Editor));
        // Newest post first: the selection starts on "second".
        assert_eq!(app.editor().post_id(), Some(PostId(2)));
    }

    #[test]
    fn category_modal_returns_focus_to_its_origin() {
        let (mut app, _rx) = make_app();
        app.open_compose();
        app.open_category_dialog();
        assert_eq!(app.focus(), Focus::Dialog(DialogKind::Category));

        app.close_category_dialog();
        assert_eq!(app.focus(), Focus::Dialog(DialogKind::Compose));
        assert!(app.compose().is_visible());

        // From browse, closing returns to browse.
        app.close_compose();
        app.open_category_dialog();
        app.close_category_dialog();
        assert_eq!(app.focus(), Focus::Browse);
    }

    // -- category submission -------------------------------------------------

    #[test]
    fn duplicate_category_is_rejected_without_a_command() {
        let (mut app, mut rx) = make_app();
        seed_categories(&mut app, &["Tech"]);
        app.open_category_dialog();
        for c in "Tech".chars() {
            app.dispatch_category(CategoryIntent::Input(c));
        }

        app.submit_category();

        assert_eq!(
            app.category_dialog().error(),
            Some("Category name already exists")
        );
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        assert!(!app.category_dialog().is_submitting());
    }

    #[test]
    fn valid_category_sends_create_command() {
        let (mut app, mut rx) = make_app();
        seed_categories(&mut app, &["Tech"]);
        app.open_category_dialog();
        for c in "Life".chars() {
            app.dispatch_category(CategoryIntent::Input(c));
        }

        app.submit_category();

        assert!(app.category_dialog().is_submitting());
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreCommand::CreateCategory {
                name: "Life".to_string()
            }
        );

        // Success closes the modal and hands focus back.
        app.on_mutation(MutationKind::CreateCategory, Ok(()));
        assert!(!app.category_dialog().is_visible());
        assert_eq!(app.focus(), Focus::Browse);
    }

    // -- delete confirmation -------------------------------------------------

    #[test]
    fn confirm_defaults_to_cancel() {
        let (mut app, mut rx) = make_app();
        seed_posts(&mut app, &["only"]);
        app.open_confirm();
        assert!(app.confirm().cancel_selected());

        app.confirm_choice();
        assert!(!app.confirm().is_visible());
        assert_eq!(app.focus(), Focus::Browse);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn confirmed_delete_sends_command_and_reports_failure() {
        let (mut app, mut rx) = make_app();
        seed_posts(&mut app, &["only"]);
        app.open_confirm();
        app.dispatch_confirm(ConfirmIntent::SelectDelete);
        app.confirm_choice();

        assert!(app.confirm().is_pending());
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreCommand::DeletePost { id: PostId(1) }
        );

        app.on_mutation(MutationKind::DeletePost, Err("HTTP 500".to_string()));
        assert!(!app.confirm().is_visible());
        assert_eq!(app.focus(), Focus::Browse);
        assert_eq!(app.status_message(), Some("HTTP 500"));
    }

    // -- error banner ---------------------------------------------------------

    #[test]
    fn banner_clears_on_next_refresh() {
        let (mut app, _rx) = make_app();
        app.on_refresh_failed("connection refused".to_string());
        assert_eq!(app.status_message(), Some("connection refused"));

        app.on_state_refreshed();
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn full_queue_surfaces_in_the_banner() {
        let (mut app, _rx) = make_app_with_capacity(1);
        app.request_refresh();
        app.request_refresh();
        assert!(app.status_message().is_some());
    }

    // -- host parsing ---------------------------------------------------------

    #[test]
    fn host_of_strips_scheme_and_path() {
        assert_eq!(host_of("https://example.com/"), "example.com");
        assert_eq!(host_of("http://localhost:8080/api"), "localhost:8080");
        assert_eq!(host_of("example.org"), "example.org");
    }
}
