pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod views;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    edges::{
        edge_dto::EdgeDto,
        edge_list_response::EdgeListResponse,
        edge_response::EdgeResponse,
        edges::{create_edge, delete_edge, list_edges},
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::admin_session::RequireAdmin,
    nodes::{
        node_delete_response::NodeDeleteResponse,
        node_dto::NodeDto,
        node_list_response::NodeListResponse,
        node_response::NodeResponse,
        nodes::{create_node, delete_node, get_node, list_nodes},
    },
    session::{
        login_request::LoginRequest,
        session::{get_session, login, logout, set_theme, toggle_theme},
        session_response::SessionResponse,
        theme_request::ThemeRequest,
    },
    stats::{StatsResponse, get_stats},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
