//! Admin panel: the map graph editor

use crate::AppState;
use crate::api::error::Result as ApiResult;
use crate::views::layout::PageShell;

use mn_core::{GraphStats, MapGraphEditor, NodeType, SessionSnapshot};

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Node as listed in the editor
pub struct NodeRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub node_type: NodeType,
    pub qr_code: String,
}

/// Edge as listed in the editor, labelled by endpoint names
pub struct EdgeRow {
    pub id: String,
    pub label: String,
    pub distance: f64,
    pub accessibility: &'static str,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate<'a> {
    pub page: PageShell<'a>,
    pub node_types: &'static [NodeType],
    pub nodes: Vec<NodeRow>,
    pub edges: Vec<EdgeRow>,
    pub stats: GraphStats,
}

#[derive(Template)]
#[template(path = "forbidden.html")]
pub struct ForbiddenTemplate<'a> {
    pub page: PageShell<'a>,
}

/// GET /admin
pub async fn admin(State(state): State<AppState>) -> ApiResult<Response> {
    let session = state.session.lock().await.snapshot();

    if !session.is_admin {
        log::debug!("Admin page requested without the admin role");
        let html = render_forbidden(&session)?;
        return Ok((StatusCode::FORBIDDEN, Html(html)).into_response());
    }

    let graph = state.graph.lock().await;
    Ok(Html(render_admin(&session, &graph)?).into_response())
}

pub fn render_forbidden(session: &SessionSnapshot) -> askama::Result<String> {
    ForbiddenTemplate {
        page: PageShell::new("Access denied", session, "/admin"),
    }
    .render()
}

pub fn render_admin(session: &SessionSnapshot, graph: &MapGraphEditor) -> askama::Result<String> {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| NodeRow {
            id: node.id.clone(),
            name: node.name.clone(),
            location: node.location_label(),
            node_type: node.node_type,
            qr_code: node.qr_code.clone().unwrap_or_default(),
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| EdgeRow {
            id: edge.id.clone(),
            label: graph.describe_edge(edge),
            distance: edge.distance,
            accessibility: edge.accessibility_label(),
        })
        .collect();

    AdminTemplate {
        page: PageShell::new("Admin", session, "/admin"),
        node_types: &NodeType::ALL,
        nodes,
        edges,
        stats: graph.stats(),
    }
    .render()
}
