//! Blocking UI loop plus the tokio runtime that hosts the store worker.

use std::io;

use tokio::runtime::Builder;

use crate::api::BlogClient;
use crate::bridge;
use crate::config::Config;
use crate::store::BlogStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> io::Result<()> {
    let runtime = Builder::new_multi_thread().enable_all().build()?;

    let client = BlogClient::new(&config.api);
    let store = BlogStore::new(client);
    let tick_rate = config.ui.tick();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let commands = bridge::spawn(runtime.handle(), store.clone(), events.sender());
    let mut app = App::new(&config, store, commands);
    app.request_refresh();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // A redraw happens every loop pass anyway.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StateRefreshed) => app.on_state_refreshed(),
            Ok(AppEvent::RefreshFailed(message)) => app.on_refresh_failed(message),
            Ok(AppEvent::Mutation { kind, outcome }) => app.on_mutation(kind, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
