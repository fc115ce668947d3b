//! Map edge REST API handlers

use crate::{
    ApiResult, AppState, DeleteResponse, EdgeDto, EdgeListResponse, EdgeResponse, RequireAdmin,
};

use mn_core::EdgeDraft;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// GET /api/v1/edges
pub async fn list_edges(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> ApiResult<Json<EdgeListResponse>> {
    let graph = state.graph.lock().await;

    let edges = graph
        .edges()
        .iter()
        .map(|edge| EdgeDto::new(edge.clone(), graph.describe_edge(edge)))
        .collect();

    Ok(Json(EdgeListResponse { edges }))
}

/// POST /api/v1/edges
pub async fn create_edge(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    payload: Result<Json<EdgeDraft>, JsonRejection>,
) -> ApiResult<Json<EdgeResponse>> {
    let Json(draft) = payload?;

    let mut graph = state.graph.lock().await;
    let edge = graph.add_edge(draft)?;
    let label = graph.describe_edge(&edge);

    log::debug!("Edge {} created by {} via REST API", edge.id, admin.email);

    Ok(Json(EdgeResponse {
        edge: EdgeDto::new(edge, label),
    }))
}

/// DELETE /api/v1/edges/{id}
pub async fn delete_edge(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let mut graph = state.graph.lock().await;
    let edge = graph.delete_edge(&id)?;

    log::debug!("Edge {} deleted by {} via REST API", edge.id, admin.email);

    Ok(Json(DeleteResponse { deleted_id: edge.id }))
}
