//! Map node REST API handlers
//!
//! All handlers require an admin session.

use crate::{
    ApiError, ApiResult, AppState, NodeDeleteResponse, NodeDto, NodeListResponse, NodeResponse,
    RequireAdmin,
};

use mn_core::NodeDraft;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// GET /api/v1/nodes
pub async fn list_nodes(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> ApiResult<Json<NodeListResponse>> {
    let graph = state.graph.lock().await;

    Ok(Json(NodeListResponse {
        nodes: graph.nodes().iter().cloned().map(NodeDto::from).collect(),
    }))
}

/// GET /api/v1/nodes/{id}
pub async fn get_node(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<NodeResponse>> {
    let graph = state.graph.lock().await;
    let node = graph
        .node(&id)
        .cloned()
        .ok_or_else(|| ApiError::not_found(format!("Node {} not found", id)))?;

    Ok(Json(NodeResponse { node: node.into() }))
}

/// POST /api/v1/nodes
///
/// Every body field may be missing; the editor decides what is acceptable.
pub async fn create_node(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    payload: Result<Json<NodeDraft>, JsonRejection>,
) -> ApiResult<Json<NodeResponse>> {
    let Json(draft) = payload?;

    let mut graph = state.graph.lock().await;
    let node = graph.add_node(draft)?;

    log::debug!("Node {} created by {} via REST API", node.id, admin.email);

    Ok(Json(NodeResponse { node: node.into() }))
}

/// DELETE /api/v1/nodes/{id}
///
/// Also removes every edge that starts or ends at the node.
pub async fn delete_node(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> ApiResult<Json<NodeDeleteResponse>> {
    let mut graph = state.graph.lock().await;
    let removal = graph.delete_node(&id)?;

    log::debug!("Node {} deleted by {} via REST API", id, admin.email);

    Ok(Json(NodeDeleteResponse {
        removed_edge_ids: removal.removed_edge_ids(),
        deleted_id: removal.node.id,
    }))
}
