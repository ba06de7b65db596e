//! Snapshot store with fetch-and-replace semantics.
//!
//! Mutations go to the server first and then re-fetch the affected list;
//! local state is never patched in place. Overlapping refreshes are
//! allowed, but commits are ticket-gated so a slow response started
//! earlier cannot overwrite a list fetched later.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::api::{ApiError, BlogClient, Category, Post, PostDraft, PostId};

/// Point-in-time copy of the shared state, cloned out per read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSnapshot {
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
    /// True until the first successful fetch of either list. Never flips
    /// back; later refreshes keep serving the previous snapshot while they
    /// run.
    pub is_loading: bool,
}

/// Refresh tickets for one resource. `issued` hands out a ticket before
/// each fetch; `committed` records the newest ticket whose response has
/// been applied. A response commits only if its ticket is newer.
#[derive(Debug, Default)]
struct Generation {
    issued: u64,
    committed: u64,
}

impl Generation {
    fn next_ticket(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn try_commit(&mut self, ticket: u64) -> bool {
        if ticket > self.committed {
            self.committed = ticket;
            true
        } else {
            false
        }
    }
}

struct StoreInner {
    categories: Vec<Category>,
    posts: Vec<Post>,
    loaded: bool,
    categories_gen: Generation,
    posts_gen: Generation,
}

/// Cloneable handle to the shared blog state.
///
/// Every mutation refreshes the affected list unconditionally, success or
/// failure, so the views always end up showing the server's truth. The
/// first error along the way is the one returned; how to display it is the
/// caller's business.
#[derive(Clone)]
pub struct BlogStore {
    inner: Arc<RwLock<StoreInner>>,
    client: BlogClient,
}

impl BlogStore {
    pub fn new(client: BlogClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                categories: Vec::new(),
                posts: Vec::new(),
                loaded: false,
                categories_gen: Generation::default(),
                posts_gen: Generation::default(),
            })),
            client,
        }
    }

    /// Current state. The only read surface the UI uses.
    pub fn snapshot(&self) -> BlogSnapshot {
        let inner = self.inner.read();
        BlogSnapshot {
            categories: inner.categories.clone(),
            posts: inner.posts.clone(),
            is_loading: !inner.loaded,
        }
    }

    /// Fetch the category list and replace the local copy.
    pub async fn refresh_categories(&self) -> Result<(), ApiError> {
        let ticket = self.inner.write().categories_gen.next_ticket();

        match self.client.list_categories().await {
            Ok(categories) => {
                let mut inner = self.inner.write();
                if inner.categories_gen.try_commit(ticket) {
                    info!(count = categories.len(), "categories refreshed");
                    inner.categories = categories;
                    inner.loaded = true;
                } else {
                    warn!(ticket, "dropping stale category list");
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "category refresh failed");
                Err(err)
            }
        }
    }

    /// Fetch the post list and replace the local copy.
    pub async fn refresh_posts(&self) -> Result<(), ApiError> {
        let ticket = self.inner.write().posts_gen.next_ticket();

        match self.client.list_posts().await {
            Ok(posts) => {
                let mut inner = self.inner.write();
                if inner.posts_gen.try_commit(ticket) {
                    info!(count = posts.len(), "posts refreshed");
                    inner.posts = posts;
                    inner.loaded = true;
                } else {
                    warn!(ticket, "dropping stale post list");
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "post refresh failed");
                Err(err)
            }
        }
    }

    /// Create a category, then refresh the category list no matter what.
    pub async fn add_category(&self, name: &str) -> Result<(), ApiError> {
        let created = self.client.create_category(name).await;
        if let Err(err) = &created {
            warn!(name, error = %err, "category create failed");
        }

        let refreshed = self.refresh_categories().await;
        created.and(refreshed)
    }

    /// Publish a post, then refresh the post list no matter what.
    pub async fn add_post(&self, draft: &PostDraft) -> Result<(), ApiError> {
        let created = self.client.create_post(draft).await;
        if let Err(err) = &created {
            warn!(error = %err, "post create failed");
        }

        let refreshed = self.refresh_posts().await;
        created.and(refreshed)
    }

    /// Replace a post wholesale, then refresh the post list no matter what.
    pub async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<(), ApiError> {
        let updated = self.client.update_post(id, draft).await;
        if let Err(err) = &updated {
            warn!(%id, error = %err, "post update failed");
        }

        let refreshed = self.refresh_posts().await;
        updated.and(refreshed)
    }

    /// Delete a post, then refresh the post list no matter what.
    pub async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        let deleted = self.client.delete_post(id).await;
        if let Err(err) = &deleted {
            warn!(%id, error = %err, "post delete failed");
        }

        let refreshed = self.refresh_posts().await;
        deleted.and(refreshed)
    }
}
