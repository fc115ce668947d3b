use mn_core::{Coordinates, MapNode};

use serde::Serialize;

/// Map node DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct NodeDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub coordinates: Coordinates,
    pub floor: i32,
    pub accessible: bool,
    pub qr_code: Option<String>,
    pub created_at: i64,
}

impl From<MapNode> for NodeDto {
    fn from(n: MapNode) -> Self {
        Self {
            id: n.id,
            name: n.name,
            node_type: n.node_type.as_str().to_string(),
            coordinates: n.coordinates,
            floor: n.floor,
            accessible: n.accessible,
            qr_code: n.qr_code,
            created_at: n.created_at.timestamp(),
        }
    }
}
