//! Plumbing between the synchronous UI loop and the async store.
//!
//! The UI pushes [`StoreCommand`]s into a bounded channel; a worker task
//! spawns one task per command, so overlapping operations interleave the
//! same way independent HTTP requests do. Outcomes travel back through the
//! UI event channel.

use std::sync::mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc as tokio_mpsc;
use tracing::info;

use crate::api::{PostDraft, PostId};
use crate::store::BlogStore;
use crate::ui::events::AppEvent;

/// Capacity of the UI → worker channel. A full channel fails `try_send`,
/// which the UI reports in the status line instead of blocking the draw
/// loop.
const COMMAND_BUFFER: usize = 16;

/// A refresh or mutation requested by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    /// Fetch categories and posts concurrently (startup and manual refresh).
    RefreshAll,
    CreateCategory { name: String },
    CreatePost { draft: PostDraft },
    UpdatePost { id: PostId, draft: PostDraft },
    DeletePost { id: PostId },
}

/// Which mutation a [`AppEvent::Mutation`] outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    CreateCategory,
    CreatePost,
    UpdatePost,
    DeletePost,
}

pub type CommandSender = tokio_mpsc::Sender<StoreCommand>;

/// Spawn the store worker on `handle` and hand back the command sender.
pub fn spawn(handle: &Handle, store: BlogStore, events: mpsc::Sender<AppEvent>) -> CommandSender {
    let (tx, mut rx) = tokio_mpsc::channel(COMMAND_BUFFER);

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            let store = store.clone();
            let events = events.clone();
            tokio::spawn(async move {
                dispatch(command, store, events).await;
            });
        }
        info!("command channel closed, store worker exiting");
    });

    tx
}

async fn dispatch(command: StoreCommand, store: BlogStore, events: mpsc::Sender<AppEvent>) {
    match command {
        StoreCommand::RefreshAll => {
            let category_store = store.clone();
            let category_events = events.clone();
            tokio::spawn(async move {
                let outcome = category_store.refresh_categories().await;
                report_refresh(&category_events, outcome);
            });

            let outcome = store.refresh_posts().await;
            report_refresh(&events, outcome);
        }
        StoreCommand::CreateCategory { name } => {
            let outcome = store.add_category(&name).await;
            report_mutation(&events, MutationKind::CreateCategory, outcome);
        }
        StoreCommand::CreatePost { draft } => {
            let outcome = store.add_post(&draft).await;
            report_mutation(&events, MutationKind::CreatePost, outcome);
        }
        StoreCommand::UpdatePost { id, draft } => {
            let outcome = store.update_post(id, &draft).await;
            report_mutation(&events, MutationKind::UpdatePost, outcome);
        }
        StoreCommand::DeletePost { id } => {
            let outcome = store.delete_post(id).await;
            report_mutation(&events, MutationKind::DeletePost, outcome);
        }
    }
}

fn report_refresh(events: &mpsc::Sender<AppEvent>, outcome: Result<(), crate::api::ApiError>) {
    let event = match outcome {
        Ok(()) => AppEvent::StateRefreshed,
        Err(err) => AppEvent::RefreshFailed(err.to_string()),
    };
    let _ = events.send(event);
}

fn report_mutation(
    events: &mpsc::Sender<AppEvent>,
    kind: MutationKind,
    outcome: Result<(), crate::api::ApiError>,
) {
    // The store refreshed as part of the mutation; let the UI re-read the
    // snapshot before it handles the outcome.
    let _ = events.send(AppEvent::StateRefreshed);
    let _ = events.send(AppEvent::Mutation {
        kind,
        outcome: outcome.map_err(|err| err.to_string()),
    });
}
