//! Axum extractor gating the map graph endpoints

use crate::{ApiError, AppState};

use mn_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The current identity, present only when it holds the admin role
///
/// Rejects with 401 when nobody is logged in and 403 for regular users.
pub struct RequireAdmin(pub Identity);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let session = state.session.lock().await;

            match session.current_user() {
                None => Err(ApiError::unauthorized("Log in to manage the map")),
                Some(user) if !user.is_admin() => {
                    log::debug!("Rejected map access for non-admin {}", user.email);
                    Err(ApiError::forbidden("Map management requires the admin role"))
                }
                Some(user) => Ok(RequireAdmin(user.clone())),
            }
        }
    }
}
