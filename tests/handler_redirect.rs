mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_success() {
    let record = common::create_test_record(1, "redir1", "https://example.com/target", "2024-01-01");
    let (server, _store) = common::create_test_server(vec![record]);

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_matches_percent_decoded_code() {
    let record = common::create_test_record(1, "Abcdef", "https://example.com/target", "2024-01-01");
    let (server, _store) = common::create_test_server(vec![record]);

    let response = server.get("/%41bcdef").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _store) = common::create_test_server(vec![]);

    let response = server.get("/zzzzzz").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_wrong_length_is_route_not_found() {
    let (server, _store) = common::create_test_server(vec![]);

    for path in ["/abcde", "/abcdefg", "/abc.de"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), 404, "{path}");
        assert_eq!(
            response.json::<Value>()["error"]["message"],
            "Route not found"
        );
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (server, _store) = common::create_test_server(vec![]);

    let response = server.get("/some/unknown/path").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Route not found"
    );
}

#[tokio::test]
async fn test_shorten_then_resolve_end_to_end() {
    let (server, _store) = common::create_test_server(vec![]);

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();
    let code = created["shortCode"].as_str().unwrap();

    let info = server.get(&format!("/info/{code}")).await.json::<Value>();
    assert_eq!(info, created);

    let by_id = server.get("/urls/1").await.json::<Value>();
    assert_eq!(by_id, created);

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com");
}
