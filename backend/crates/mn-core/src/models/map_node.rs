//! Map node - a named location on a building floor.

use crate::{Coordinates, NodeType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub coordinates: Coordinates,
    /// 1-based floor number
    pub floor: i32,
    pub accessible: bool,
    /// Token printed on the QR sticker placed at this location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MapNode {
    /// Short location line used in node listings, e.g. "Floor 1 • (100, 100)"
    pub fn location_label(&self) -> String {
        format!("Floor {} \u{2022} {}", self.floor, self.coordinates)
    }
}
