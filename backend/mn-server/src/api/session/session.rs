//! Session REST API handlers
//!
//! Login, logout and theme preference for the single local session.

use crate::{ApiResult, AppState, LoginRequest, SessionResponse, ThemeRequest};

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// GET /api/v1/session
pub async fn get_session(State(state): State<AppState>) -> ApiResult<Json<SessionResponse>> {
    let session = state.session.lock().await;

    Ok(Json(SessionResponse {
        session: session.snapshot(),
    }))
}

/// POST /api/v1/session/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(req) = payload?;

    let mut session = state.session.lock().await;
    session.login(&req.email, &req.password).await?;

    Ok(Json(SessionResponse {
        session: session.snapshot(),
    }))
}

/// POST /api/v1/session/logout
pub async fn logout(State(state): State<AppState>) -> ApiResult<Json<SessionResponse>> {
    let mut session = state.session.lock().await;
    session.logout()?;

    Ok(Json(SessionResponse {
        session: session.snapshot(),
    }))
}

/// PUT /api/v1/session/theme
pub async fn set_theme(
    State(state): State<AppState>,
    payload: Result<Json<ThemeRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(req) = payload?;

    let mut session = state.session.lock().await;
    session.set_dark(req.dark)?;

    Ok(Json(SessionResponse {
        session: session.snapshot(),
    }))
}

/// POST /api/v1/session/theme/toggle
pub async fn toggle_theme(State(state): State<AppState>) -> ApiResult<Json<SessionResponse>> {
    let mut session = state.session.lock().await;
    session.toggle_theme()?;

    Ok(Json(SessionResponse {
        session: session.snapshot(),
    }))
}
