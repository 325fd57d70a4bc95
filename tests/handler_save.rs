mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_save_with_custom_alias() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://openai.com", "alias": "oai" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK", "alias": "oai" }));

    let link = store.find("oai").await.unwrap();
    assert_eq!(link.target_url, "https://openai.com");
}

#[tokio::test]
async fn test_save_generates_alias_when_absent() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "OK");

    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));

    let link = store.find(alias).await.unwrap();
    assert_eq!(link.target_url, "https://example.com/some/long/path");
}

#[tokio::test]
async fn test_save_generates_alias_when_empty() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["alias"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_save_seeded_generator_is_reproducible() {
    let (first, _) = common::create_seeded_test_server(7);
    let (second, _) = common::create_seeded_test_server(7);

    let a = first
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();
    let b = second
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();

    assert_eq!(a["alias"], b["alias"]);
}

#[tokio::test]
async fn test_save_missing_url() {
    let (server, store) = common::create_test_server();

    let response = server.post("/url").json(&json!({ "alias": "oai" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["code"], "validation_error");
    assert_eq!(json["error"], "field url is a required field");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_save_invalid_url() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "field url is not a valid URL");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_save_malformed_body() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/url")
        .text("{ not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "failed to decode request");
    assert!(json["details"]["reason"].is_string());
}

#[tokio::test]
async fn test_save_invalid_alias_syntax() {
    let (server, store) = common::create_test_server();

    for alias in ["has space", "slash/alias", "ünïcode"] {
        let response = server
            .post("/url")
            .json(&json!({ "url": "https://example.com", "alias": alias }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "validation_error");
    }

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_save_reserved_alias() {
    let (server, _store) = common::create_test_server();

    for alias in ["health", "url"] {
        let response = server
            .post("/url")
            .json(&json!({ "url": "https://example.com", "alias": alias }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "field alias is reserved");
    }
}

#[tokio::test]
async fn test_save_alias_conflict_keeps_original() {
    let (server, store) = common::create_test_server();
    common::save_link(&store, "taken", "https://original.example.com").await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "http://example.com", "alias": "taken" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["code"], "conflict");
    assert_eq!(json["error"], "url already exists");

    let link = store.find("taken").await.unwrap();
    assert_eq!(link.target_url, "https://original.example.com");
}

#[tokio::test]
async fn test_save_store_failure_is_generic() {
    let server = common::create_failing_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "oai" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["code"], "internal_error");
    assert_eq!(json["error"], "failed to save url");
    assert!(json.get("details").is_none());
    assert!(!json.to_string().contains("connection refused"));
}
