use crate::{MapEdge, MapNode};

use serde::Serialize;

/// Result of deleting a node: the node itself plus every edge that referenced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRemoval {
    pub node: MapNode,
    pub removed_edges: Vec<MapEdge>,
}

impl NodeRemoval {
    pub fn removed_edge_ids(&self) -> Vec<String> {
        self.removed_edges.iter().map(|e| e.id.clone()).collect()
    }
}
