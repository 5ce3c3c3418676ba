mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink::application::services::LinkService;
use shortlink::domain::repositories::RecordStore;
use shortlink::infrastructure::persistence::InMemoryStore;
use shortlink::routes::app_router;
use shortlink::state::AppState;
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_success() {
    let (server, store) = common::create_test_server(vec![]);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["originalUrl"], "https://example.com");

    let code = json["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert_eq!(json["shortUrl"], format!("{}/{}", common::BASE_URL, code));

    let today = chrono::Utc::now().date_naive().to_string();
    assert_eq!(json["createdAt"], today);

    assert_eq!(store.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_shorten_deduplication() {
    let (server, store) = common::create_test_server(vec![]);

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://dedup.com" }))
        .await
        .json::<Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://dedup.com" }))
        .await;

    assert_eq!(second.status_code(), 201);
    assert_eq!(second.json::<Value>(), first);
    assert_eq!(store.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_shorten_existing_record_keeps_original_date() {
    let existing = common::create_test_record(1, "old123", "https://old.com", "2020-02-02");
    let (server, _store) = common::create_test_server(vec![existing]);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://old.com" }))
        .await;

    let json = response.json::<Value>();
    assert_eq!(json["shortCode"], "old123");
    assert_eq!(json["createdAt"], "2020-02-02");
}

#[tokio::test]
async fn test_shorten_multiple_urls_get_consecutive_ids() {
    let (server, _store) = common::create_test_server(vec![]);

    let mut codes = std::collections::HashSet::new();
    for i in 1..=5 {
        let json = server
            .post("/shorten")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await
            .json::<Value>();

        assert_eq!(json["id"], i);
        codes.insert(json["shortCode"].as_str().unwrap().to_string());
    }

    assert_eq!(codes.len(), 5);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (server, _store) = common::create_test_server(vec![]);

    let response = server.post("/shorten").json(&json!({})).await;

    assert_eq!(response.status_code(), 400);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_null_number_and_empty() {
    let (server, store) = common::create_test_server(vec![]);

    for body in [
        json!({ "url": null }),
        json!({ "url": 42 }),
        json!({ "url": "" }),
        json!({ "url": { "href": "https://a.com" } }),
    ] {
        let response = server.post("/shorten").json(&body).await;
        assert_eq!(response.status_code(), 400, "body {body} should be rejected");
    }

    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_shorten_invalid_json() {
    let (server, _store) = common::create_test_server(vec![]);

    let response = server.post("/shorten").text("{ not json").await;

    assert_eq!(response.status_code(), 400);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["message"], "Invalid JSON body");
}

#[tokio::test]
async fn test_shorten_empty_body() {
    let (server, _store) = common::create_test_server(vec![]);

    let response = server.post("/shorten").await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_shorten_accepts_json_without_content_type() {
    let (server, _store) = common::create_test_server(vec![]);

    let response = server
        .post("/shorten")
        .text(r#"{"url":"https://example.com/plain"}"#)
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(
        response.json::<Value>()["originalUrl"],
        "https://example.com/plain"
    );
}

#[tokio::test]
async fn test_shorten_wrong_method_is_not_found() {
    let (server, _store) = common::create_test_server(vec![]);

    let response = server.get("/shorten").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_shorten_code_generation_exhausted() {
    fn always_taken() -> String {
        "aaaaaa".to_string()
    }

    let store = Arc::new(InMemoryStore::with_records(vec![common::create_test_record(
        1,
        "aaaaaa",
        "https://a.com",
        "2024-01-01",
    )]));
    let link_service = LinkService::new(store.clone() as Arc<dyn RecordStore>, common::BASE_URL)
        .with_max_code_attempts(3)
        .with_code_generator(always_taken);
    let server = TestServer::new(app_router(AppState::new(Arc::new(link_service)))).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://b.com" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "code_generation_exhausted");
    assert_eq!(json["error"]["message"], "Failed to generate unique code");
    assert_eq!(store.load().await.unwrap().len(), 1);
}
