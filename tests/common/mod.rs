//! Shared test utilities and the mock blog server.

#![allow(dead_code)]

pub mod mock_api;

use serde_json::json;

use termpost::api::{Category, CategoryId, Post, PostId};
use termpost::config::{ApiConfig, Config};

/// Config pointing at `base_url`, with short timeouts for tests.
pub fn test_config(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        },
        ..Config::default()
    }
}

pub fn category(id: u64, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        name: name.to_string(),
    }
}

pub fn post(id: u64, title: &str, content: &str, tags: &[(u64, &str)]) -> Post {
    Post {
        id: PostId(id),
        title: title.to_string(),
        content: content.to_string(),
        categories: tags.iter().map(|(id, name)| category(*id, name)).collect(),
    }
}

/// Body of `GET /api/categories/`.
pub fn categories_json(categories: &[(u64, &str)]) -> String {
    let items: Vec<_> = categories
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name }))
        .collect();
    json!({ "categories": items }).to_string()
}

/// One post as the server serializes it.
pub fn post_json(id: u64, title: &str, content: &str, tags: &[(u64, &str)]) -> serde_json::Value {
    let categories: Vec<_> = tags
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name }))
        .collect();
    json!({ "id": id, "title": title, "content": content, "categories": categories })
}

/// Body of `GET /api/posts/`, oldest first.
pub fn posts_json(posts: &[serde_json::Value]) -> String {
    json!(posts).to_string()
}
