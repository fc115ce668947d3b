use crate::ApiError;

use mn_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Node 42 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Node 42 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Node name is required".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let response = ApiError::unauthorized("Log in first").into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let response = ApiError::forbidden("Admins only").into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Session storage operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_validation_keeps_field() {
    let api_err: ApiError = CoreError::validation("distance", "Distance must be non-zero").into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("non-zero"));
            assert_eq!(field.as_deref(), Some("distance"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_not_found_converts_to_not_found() {
    let api_err: ApiError = CoreError::not_found("node", "n-1").into();

    match api_err {
        ApiError::NotFound { message, .. } => assert!(message.contains("n-1")),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_storage_error_hides_details() {
    let api_err: ApiError = CoreError::storage("disk full at /var/lib").into();

    match api_err {
        ApiError::Internal { message, .. } => assert!(!message.contains("/var/lib")),
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_template_error_converts_to_internal() {
    let source = std::io::Error::other("missing block");
    let api_err: ApiError = askama::Error::Custom(Box::new(source)).into();

    match api_err {
        ApiError::Internal { message, .. } => assert_eq!(message, "Page rendering failed"),
        _ => panic!("Expected Internal error"),
    }
}
