use mn_core::MapEdge;

use serde::Serialize;

/// Map edge DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct EdgeDto {
    pub id: String,
    pub start: String,
    pub end: String,
    pub distance: f64,
    pub accessible: bool,
    /// "Start Name → End Name", with "?" for endpoints that no longer exist
    pub label: String,
    pub created_at: i64,
}

impl EdgeDto {
    pub fn new(edge: MapEdge, label: String) -> Self {
        Self {
            id: edge.id,
            start: edge.start,
            end: edge.end,
            distance: edge.distance,
            accessible: edge.accessible,
            label,
            created_at: edge.created_at.timestamp(),
        }
    }
}
