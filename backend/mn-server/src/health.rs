use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let graph = state.graph.lock().await.stats();
    let session = if state.session.lock().await.is_authenticated() {
        "authenticated"
    } else {
        "anonymous"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "session": session,
            "graph": {
                "nodes": graph.nodes,
                "edges": graph.edges,
            },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe
///
/// The session store is opened before the listener binds, so serving means ready.
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
