mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use link_shortener::api::routes::link_routes;
use serde_json::{Value, json};

/// Build a test server with the link management routes over an in-memory
/// store, exactly as they are nested in the real router.
fn make_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .nest("/api/v1", link_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

async fn create_link(server: &TestServer, long_url: &str) -> Value {
    let response = server
        .post("/api/v1/links")
        .json(&json!({ "long_url": long_url }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}

// ─── POST (create) ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_success() {
    let server = make_server();

    let body = create_link(&server, "https://example.com/a").await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["long_url"], "https://example.com/a");
    assert_eq!(body["click_count"], 0);
    assert_eq!(body["short_url"].as_str().unwrap().len(), 12);
    assert!(
        body["short_link"]
            .as_str()
            .unwrap()
            .starts_with("https://sho.rt/")
    );
}

#[tokio::test]
async fn test_create_link_is_idempotent_per_url() {
    let server = make_server();

    let first = create_link(&server, "https://example.com/a").await;
    let second = create_link(&server, "https://example.com/a").await;

    // Same record, no duplicate inserted.
    assert_eq!(first["id"], second["id"]);
    assert_eq!(first["short_url"], second["short_url"]);

    let list = server.get("/api/v1/links").await.json::<Value>();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_link_rejects_supplied_id() {
    let server = make_server();

    let response = server
        .post("/api/v1/links")
        .json(&json!({ "id": 7, "long_url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();

    // Nothing was inserted.
    let list = server.get("/api/v1/links").await.json::<Value>();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let server = make_server();

    let response = server
        .post("/api/v1/links")
        .json(&json!({ "long_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["status"], 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_link_alias_is_deterministic() {
    let server = make_server();

    let a = create_link(&server, "https://example.com/a").await;
    let b = create_link(&server, "https://example.com/b").await;

    assert_ne!(a["short_url"], b["short_url"]);

    let a_again = create_link(&server, "https://example.com/a").await;
    assert_eq!(a["short_url"], a_again["short_url"]);
}

// ─── GET by id ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_link_by_id() {
    let server = make_server();
    let created = create_link(&server, "https://example.com/a").await;

    let response = server
        .get(&format!("/api/v1/links/{}", created["id"]))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["long_url"], "https://example.com/a");
}

#[tokio::test]
async fn test_get_link_zero_id_is_validation_error() {
    let server = make_server();

    let response = server.get("/api/v1/links/0").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_get_link_unknown_id_not_found() {
    let server = make_server();

    let response = server.get("/api/v1/links/42").await;

    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["status"], 404);
}

// ─── GET list ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_empty() {
    let server = make_server();

    let response = server.get("/api/v1/links").await;

    response.assert_status_ok();
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_links_insertion_order() {
    let server = make_server();

    create_link(&server, "https://example.com/a").await;
    create_link(&server, "https://example.com/b").await;
    create_link(&server, "https://example.com/c").await;

    let list = server.get("/api/v1/links").await.json::<Value>();
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();

    assert_eq!(ids, vec![1, 2, 3]);
}

// ─── PUT (update) ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_link_replaces_fields() {
    let server = make_server();
    let created = create_link(&server, "https://old.com").await;

    let response = server
        .put(&format!("/api/v1/links/{}", created["id"]))
        .json(&json!({
            "long_url": "https://new.com",
            "created_at": "2020-01-01T00:00:00Z",
            "click_count": 5
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["long_url"], "https://new.com");
    assert_eq!(body["click_count"], 5);
    assert!(body["created_at"].as_str().unwrap().starts_with("2020"));

    // Alias recomputed from the new long URL.
    assert_ne!(body["short_url"], created["short_url"]);
    assert_eq!(body["short_url"].as_str().unwrap().len(), 12);
}

#[tokio::test]
async fn test_update_link_unknown_id_not_found() {
    let server = make_server();

    let response = server
        .put("/api/v1/links/42")
        .json(&json!({
            "long_url": "https://new.com",
            "created_at": "2020-01-01T00:00:00Z",
            "click_count": 0
        }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_link_rejects_future_created_at() {
    let server = make_server();
    create_link(&server, "https://example.com").await;

    let response = server
        .put("/api/v1/links/1")
        .json(&json!({
            "long_url": "https://example.com",
            "created_at": "2999-01-01T00:00:00Z",
            "click_count": 0
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_link_rejects_negative_click_count() {
    let server = make_server();
    create_link(&server, "https://example.com").await;

    let response = server
        .put("/api/v1/links/1")
        .json(&json!({
            "long_url": "https://example.com",
            "created_at": "2020-01-01T00:00:00Z",
            "click_count": -1
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_link_invalid_url() {
    let server = make_server();
    create_link(&server, "https://example.com").await;

    let response = server
        .put("/api/v1/links/1")
        .json(&json!({
            "long_url": "not-a-url",
            "created_at": "2020-01-01T00:00:00Z",
            "click_count": 0
        }))
        .await;

    response.assert_status_bad_request();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_success() {
    let server = make_server();
    let created = create_link(&server, "https://example.com").await;

    let response = server
        .delete(&format!("/api/v1/links/{}", created["id"]))
        .await;

    response.assert_status_ok();

    server
        .get(&format!("/api/v1/links/{}", created["id"]))
        .await
        .assert_status_not_found();

    let list = server.get("/api/v1/links").await.json::<Value>();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_link_unknown_id_not_found() {
    let server = make_server();

    let response = server.delete("/api/v1/links/42").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_twice_second_is_not_found() {
    let server = make_server();
    create_link(&server, "https://example.com").await;

    server
        .delete("/api/v1/links/1")
        .await
        .assert_status(StatusCode::OK);

    server
        .delete("/api/v1/links/1")
        .await
        .assert_status_not_found();
}
