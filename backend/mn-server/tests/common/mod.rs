#![allow(dead_code)]

//! Test infrastructure for mn-server API tests

use mn_core::{EdgePolicy, JsonFileStore, MapGraphEditor, MemoryStore, SessionStore};
use mn_server::{AppState, build_router};

use std::path::Path;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@micronav.com";
pub const USER_EMAIL: &str = "visitor@campus.edu";

/// AppState over in-memory storage, seeded with the demo graph
pub fn create_test_app_state() -> AppState {
    create_app_state_with_policy(EdgePolicy::Permissive)
}

pub fn create_app_state_with_policy(policy: EdgePolicy) -> AppState {
    let session = SessionStore::open(Box::new(MemoryStore::new()), false)
        .expect("Failed to open session store");
    AppState::new(session, MapGraphEditor::with_demo_data(policy))
}

/// AppState whose session survives in a JSON file under `dir`
pub fn create_file_backed_app_state(dir: &Path) -> AppState {
    let storage = JsonFileStore::open(dir.join("storage.json")).expect("Failed to open storage");
    let session =
        SessionStore::open(Box::new(storage), false).expect("Failed to open session store");
    AppState::new(session, MapGraphEditor::new(EdgePolicy::Permissive))
}

/// Send one request through a fresh router and decode the JSON body
pub async fn send_json(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    let request = match body {
        Some(json) => request.body(Body::from(json.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// GET a page and return its status and markup
pub async fn get_page(state: &AppState, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn login(state: &AppState, email: &str) {
    let (status, _) = send_json(
        state,
        "POST",
        "/api/v1/session/login",
        Some(serde_json::json!({ "email": email, "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
