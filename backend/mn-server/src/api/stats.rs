//! Graph summary handler

use crate::{ApiResult, AppState, RequireAdmin};

use mn_core::GraphStats;

use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: GraphStats,
}

/// GET /api/v1/stats
pub async fn get_stats(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> ApiResult<Json<StatsResponse>> {
    let graph = state.graph.lock().await;

    Ok(Json(StatsResponse {
        stats: graph.stats(),
    }))
}
