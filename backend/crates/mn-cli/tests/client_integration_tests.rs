//! Integration tests for the CLI client using wiremock mock server

use mn_cli::Client;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, method, path},
};

#[tokio::test]
async fn test_get_session_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session": { "user": null, "is_admin": false, "theme": "light" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.get_session().await.unwrap();

    assert!(result["session"]["user"].is_null());
    assert_eq!(result["session"]["theme"], "light");
}

#[tokio::test]
async fn test_login_sends_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/session/login"))
        .and(body_json(json!({ "email": "admin@micronav.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session": {
                "user": {
                    "id": "a1",
                    "name": "Admin User",
                    "email": "admin@micronav.com",
                    "role": "admin"
                },
                "is_admin": true,
                "theme": "light"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.login("admin@micronav.com", "pw").await.unwrap();

    assert_eq!(result["session"]["is_admin"], true);
    assert_eq!(result["session"]["user"]["role"], "admin");
}

#[tokio::test]
async fn test_get_theme_extracts_theme_from_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session": { "user": null, "is_admin": false, "theme": "dark" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.get_theme().await.unwrap();

    assert_eq!(result, json!({ "theme": "dark" }));
}

#[tokio::test]
async fn test_set_theme_puts_dark_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/session/theme"))
        .and(body_json(json!({ "dark": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session": { "user": null, "is_admin": false, "theme": "dark" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.set_theme(true).await.unwrap();

    assert_eq!(result["session"]["theme"], "dark");
}

#[tokio::test]
async fn test_create_node_omits_unset_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/nodes"))
        .and(body_json(json!({
            "name": "Lab 101",
            "coordinates": { "x": 300, "y": 120 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "node": {
                "id": "n-3",
                "name": "Lab 101",
                "type": "room",
                "coordinates": { "x": 300, "y": 120 },
                "floor": 1,
                "accessible": true,
                "qr_code": "QR003",
                "created_at": 1704067200
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client
        .create_node("Lab 101", 300, 120, None, None, None)
        .await
        .unwrap();

    assert_eq!(result["node"]["qr_code"], "QR003");
}

#[tokio::test]
async fn test_create_node_sends_type_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/nodes"))
        .and(body_string_contains(r#""type":"stairway""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "node": { "id": "n-4" } })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client
        .create_node("Stair C", 0, 0, Some("stairway"), Some(2), Some(false))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_node_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/nodes"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": "VALIDATION_ERROR",
                "message": "Node name is required",
                "field": "name"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let err = client
        .create_node("", 1, 1, None, None, None)
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("VALIDATION_ERROR"));
    assert!(err.to_string().contains("Node name is required"));
}

#[tokio::test]
async fn test_list_nodes_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/nodes"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": "UNAUTHORIZED", "message": "Log in to manage the map" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let err = client.list_nodes().await.unwrap_err();

    assert_eq!(err.code(), Some("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_delete_node_returns_removed_edges() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/nodes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deleted_id": "1",
            "removed_edge_ids": ["e1"]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.delete_node("1").await.unwrap();

    assert_eq!(result["removed_edge_ids"], json!(["e1"]));
}

#[tokio::test]
async fn test_create_edge_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/edges"))
        .and(body_json(json!({ "start": "1", "end": "2", "distance": 25.5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "edge": {
                "id": "e-2",
                "start": "1",
                "end": "2",
                "distance": 25.5,
                "accessible": true,
                "label": "Main Entrance \u{2192} Conference Room A",
                "created_at": 1704067200
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.create_edge("1", "2", 25.5, None).await.unwrap();

    assert_eq!(result["edge"]["distance"], 25.5);
}

#[tokio::test]
async fn test_delete_edge_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/edges/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "NOT_FOUND", "message": "edge missing not found" }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.delete_edge("missing").await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_error_without_error_body_uses_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/stats"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let err = client.stats().await.unwrap_err();

    assert_eq!(err.code(), Some("HTTP_503"));
}

#[tokio::test]
async fn test_plain_text_error_body_uses_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/edges/e1"))
        .respond_with(ResponseTemplate::new(405).set_body_string("Method Not Allowed"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let err = client.delete_edge("e1").await.unwrap_err();

    assert_eq!(err.code(), Some("HTTP_405"));
    assert!(err.to_string().contains("Method Not Allowed"));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let client = Client::new("http://127.0.0.1:1");
    let err = client.get_session().await.unwrap_err();

    assert!(err.code().is_none());
    assert!(err.to_string().contains("HTTP request error"));
}
