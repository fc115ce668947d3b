use crate::{AppState, api, health, views};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Session
        .route("/session", get(api::session::session::get_session))
        .route("/session/login", post(api::session::session::login))
        .route("/session/logout", post(api::session::session::logout))
        .route("/session/theme", put(api::session::session::set_theme))
        .route(
            "/session/theme/toggle",
            post(api::session::session::toggle_theme),
        )
        // Map graph (admin only)
        .route(
            "/nodes",
            get(api::nodes::nodes::list_nodes).post(api::nodes::nodes::create_node),
        )
        .route(
            "/nodes/{id}",
            get(api::nodes::nodes::get_node).delete(api::nodes::nodes::delete_node),
        )
        .route(
            "/edges",
            get(api::edges::edges::list_edges).post(api::edges::edges::create_edge),
        )
        .route("/edges/{id}", delete(api::edges::edges::delete_edge))
        .route("/stats", get(api::stats::get_stats));

    Router::new()
        // Pages
        .route("/", get(views::home::home))
        .route("/dashboard", get(views::dashboard::dashboard))
        .route("/admin", get(views::admin::admin))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api_routes)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
