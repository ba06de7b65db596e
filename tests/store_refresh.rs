//! Store semantics against the mock server: fetch-and-replace snapshots,
//! the loading flag, unconditional refresh after mutations, and what
//! happens when refreshes overlap.

mod common;

use std::time::Duration;

use common::mock_api::{MockApi, MockResponse};
use common::{categories_json, post_json, posts_json, test_config};

use termpost::api::{BlogClient, CategoryId, PostDraft, PostId};
use termpost::store::BlogStore;

fn store_for(api: &MockApi) -> BlogStore {
    let config = test_config(&api.base_url());
    BlogStore::new(BlogClient::new(&config.api))
}

fn draft(title: &str) -> PostDraft {
    PostDraft {
        title: title.to_string(),
        content: "content".to_string(),
        categories: vec![CategoryId(1)],
    }
}

#[tokio::test]
async fn loading_clears_after_the_first_successful_fetch() {
    let api = MockApi::start().await;
    let store = store_for(&api);
    assert!(store.snapshot().is_loading);

    store.refresh_posts().await.unwrap();
    assert!(!store.snapshot().is_loading);
}

#[tokio::test]
async fn refresh_replaces_the_post_list_wholesale() {
    let api = MockApi::start().await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[post_json(1, "One", "a", &[(1, "Tech")])])),
    )
    .await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[post_json(2, "Two", "b", &[(1, "Tech")])])),
    )
    .await;

    let store = store_for(&api);
    store.refresh_posts().await.unwrap();
    assert_eq!(store.snapshot().posts[0].id, PostId(1));

    store.refresh_posts().await.unwrap();
    let posts = store.snapshot().posts;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, PostId(2));
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_snapshot() {
    let api = MockApi::start().await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[post_json(1, "Keep", "a", &[])])),
    )
    .await;
    api.enqueue("GET", "/api/posts/", MockResponse::status(500))
        .await;

    let store = store_for(&api);
    store.refresh_posts().await.unwrap();
    store.refresh_posts().await.unwrap_err();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.posts.len(), 1);
    assert_eq!(snapshot.posts[0].title, "Keep");
    assert!(!snapshot.is_loading);
}

#[tokio::test]
async fn category_refresh_leaves_posts_alone() {
    let api = MockApi::start().await;
    api.enqueue(
        "GET",
        "/api/categories/",
        MockResponse::json(&categories_json(&[(1, "Tech")])),
    )
    .await;

    let store = store_for(&api);
    store.refresh_categories().await.unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.categories.len(), 1);
    assert_eq!(snapshot.categories[0].name, "Tech");
    assert!(snapshot.posts.is_empty());
    assert!(!snapshot.is_loading);
}

#[tokio::test]
async fn successful_mutation_commits_the_refetched_list() {
    let api = MockApi::start().await;
    api.enqueue(
        "GET",
        "/api/categories/",
        MockResponse::json(&categories_json(&[(1, "Tech")])),
    )
    .await;

    let store = store_for(&api);
    store.add_category("Tech").await.unwrap();

    assert_eq!(store.snapshot().categories.len(), 1);

    let requests = api.requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(
        requests[0].body_json(),
        serde_json::json!({ "name": "Tech" })
    );
    assert_eq!(requests[1].method, "GET");
}

#[tokio::test]
async fn failed_mutation_still_refreshes() {
    let api = MockApi::start().await;
    api.enqueue("POST", "/api/posts/", MockResponse::status(422))
        .await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[post_json(9, "Server", "truth", &[])])),
    )
    .await;

    let store = store_for(&api);
    let err = store.add_post(&draft("New")).await.unwrap_err();
    assert!(err.to_string().contains("422"));

    // The re-fetch ran anyway and its result was committed.
    let snapshot = store.snapshot();
    assert_eq!(snapshot.posts.len(), 1);
    assert_eq!(snapshot.posts[0].id, PostId(9));

    let methods: Vec<String> = api
        .requests()
        .await
        .iter()
        .map(|request| request.method.clone())
        .collect();
    assert_eq!(methods, vec!["POST", "GET"]);
}

#[tokio::test]
async fn delete_refresh_drops_the_post() {
    let api = MockApi::start().await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[
            post_json(1, "First", "a", &[]),
            post_json(2, "Second", "b", &[]),
        ])),
    )
    .await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[post_json(2, "Second", "b", &[])])),
    )
    .await;

    let store = store_for(&api);
    store.refresh_posts().await.unwrap();
    store.delete_post(PostId(1)).await.unwrap();

    let posts = store.snapshot().posts;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, PostId(2));
}

#[tokio::test]
async fn slow_stale_list_cannot_overwrite_a_newer_one() {
    let api = MockApi::start().await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[post_json(1, "Stale", "old", &[])])).with_delay(300),
    )
    .await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[post_json(2, "Fresh", "new", &[])])),
    )
    .await;

    let store = store_for(&api);
    let slow_store = store.clone();
    let slow = tokio::spawn(async move { slow_store.refresh_posts().await });

    // Let the slow fetch take its ticket and claim the delayed response.
    tokio::time::sleep(Duration::from_millis(100)).await;
    store.refresh_posts().await.unwrap();
    assert_eq!(store.snapshot().posts[0].title, "Fresh");

    // The stale response lands later and must be discarded.
    slow.await.unwrap().unwrap();
    assert_eq!(store.snapshot().posts[0].title, "Fresh");
}

#[tokio::test]
async fn overlapping_mutations_settle_on_the_latest_refresh() {
    let api = MockApi::start().await;
    // The delete's follow-up list is slow and predates the create.
    api.enqueue("DELETE", "/api/posts/1/", MockResponse::status(200))
        .await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[])).with_delay(300),
    )
    .await;
    // The create's follow-up list is fast and already reflects both changes.
    api.enqueue("POST", "/api/posts/", MockResponse::status(201))
        .await;
    api.enqueue(
        "GET",
        "/api/posts/",
        MockResponse::json(&posts_json(&[post_json(2, "Newest", "n", &[(1, "Tech")])])),
    )
    .await;

    let store = store_for(&api);
    let deleter = store.clone();
    let delete = tokio::spawn(async move { deleter.delete_post(PostId(1)).await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    store.add_post(&draft("Newest")).await.unwrap();
    delete.await.unwrap().unwrap();

    // The newer list sticks even though the older one arrived last.
    let snapshot = store.snapshot();
    assert_eq!(snapshot.posts.len(), 1);
    assert_eq!(snapshot.posts[0].title, "Newest");
}
