//! Thin asynchronous client, one method per remote operation.
//!
//! Every route carries a trailing slash; the server expects it. Mutation
//! responses are never decoded: callers observe changes by re-listing, so
//! only the status code matters.

use reqwest::{Client, Response};
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{CategoriesEnvelope, Category, Post, PostDraft, PostId};
use crate::config::ApiConfig;

#[derive(Debug, Clone)]
pub struct BlogClient {
    http: Client,
    base_url: String,
}

impl BlogClient {
    /// Build a client from connection settings.
    pub fn new(config: &ApiConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /api/categories/`: the full category list.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/api/categories/", self.base_url);
        debug!(%url, "listing categories");

        let response = self.http.get(&url).send().await.map_err(|e| transport(&url, e))?;
        let response = check_status(&url, response)?;
        let envelope: CategoriesEnvelope =
            response.json().await.map_err(|e| decode(&url, e))?;
        Ok(envelope.categories)
    }

    /// `POST /api/categories/`: create a category by name.
    pub async fn create_category(&self, name: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/categories/", self.base_url);
        debug!(%url, name, "creating category");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        check_status(&url, response)?;
        Ok(())
    }

    /// `GET /api/posts/`: the full post list, oldest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = format!("{}/api/posts/", self.base_url);
        debug!(%url, "listing posts");

        let response = self.http.get(&url).send().await.map_err(|e| transport(&url, e))?;
        let response = check_status(&url, response)?;
        response.json().await.map_err(|e| decode(&url, e))
    }

    /// `POST /api/posts/`: publish a new post.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<(), ApiError> {
        let url = format!("{}/api/posts/", self.base_url);
        debug!(%url, title = %draft.title, "creating post");

        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        check_status(&url, response)?;
        Ok(())
    }

    /// `PUT /api/posts/{id}/`: replace an existing post wholesale.
    pub async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<(), ApiError> {
        let url = format!("{}/api/posts/{}/", self.base_url, id);
        debug!(%url, "updating post");

        let response = self
            .http
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        check_status(&url, response)?;
        Ok(())
    }

    /// `DELETE /api/posts/{id}/`: remove a post.
    pub async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        let url = format!("{}/api/posts/{}/", self.base_url, id);
        debug!(%url, "deleting post");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        check_status(&url, response)?;
        Ok(())
    }
}

fn transport(url: &str, source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        source,
    }
}

fn decode(url: &str, source: reqwest::Error) -> ApiError {
    ApiError::Decode {
        url: url.to_string(),
        source,
    }
}

/// Reject non-2xx responses before any body handling.
fn check_status(url: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status,
        })
    }
}
