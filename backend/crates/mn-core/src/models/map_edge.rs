//! Map edge - a walkable path between two nodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEdge {
    pub id: String,
    /// Node id; a weak reference, the node may not exist
    pub start: String,
    /// Node id; a weak reference, the node may not exist
    pub end: String,
    /// Length of the path in meters
    pub distance: f64,
    pub accessible: bool,
    pub created_at: DateTime<Utc>,
}

impl MapEdge {
    pub fn touches(&self, node_id: &str) -> bool {
        self.start == node_id || self.end == node_id
    }

    /// True when both edges join the same two nodes, in either direction
    pub fn connects_same_pair(&self, start: &str, end: &str) -> bool {
        (self.start == start && self.end == end) || (self.start == end && self.end == start)
    }

    pub fn accessibility_label(&self) -> &'static str {
        if self.accessible {
            "Accessible"
        } else {
            "Not accessible"
        }
    }
}
