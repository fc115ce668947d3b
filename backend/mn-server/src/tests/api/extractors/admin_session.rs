use crate::RequireAdmin;
use crate::tests::{create_test_state, login_as};

use axum::{body::Body, extract::FromRequestParts, http::Request, response::IntoResponse};
use http::StatusCode;

fn empty_parts() -> http::request::Parts {
    let request = Request::builder().body(Body::empty()).unwrap();
    let (parts, _body) = request.into_parts();
    parts
}

#[tokio::test]
async fn test_extractor_rejects_anonymous_with_401() {
    let state = create_test_state();
    let mut parts = empty_parts();

    let result = RequireAdmin::from_request_parts(&mut parts, &state).await;

    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_rejects_regular_user_with_403() {
    let state = create_test_state();
    login_as(&state, "visitor@campus.edu").await;
    let mut parts = empty_parts();

    let result = RequireAdmin::from_request_parts(&mut parts, &state).await;

    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_extractor_accepts_admin() {
    let state = create_test_state();
    login_as(&state, "admin@micronav.com").await;
    let mut parts = empty_parts();

    let result = RequireAdmin::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.ok().unwrap().0.email, "admin@micronav.com");
}

#[tokio::test]
async fn test_extractor_rejects_after_logout() {
    let state = create_test_state();
    login_as(&state, "admin@micronav.com").await;
    state.session.lock().await.logout().unwrap();
    let mut parts = empty_parts();

    let result = RequireAdmin::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}
