//! In-memory editor for the nodes and paths of a building map.
//!
//! Both collections keep insertion order. The one integrity rule enforced
//! regardless of policy: no edge outlives a node it references.

use crate::{
    CoreError, CoreResult, Coordinates, EdgeDraft, EdgePolicy, GraphStats, MapEdge, MapNode,
    NodeDraft, NodeRemoval, NodeType,
};

use std::collections::BTreeSet;

use chrono::Utc;
use log::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct MapGraphEditor {
    nodes: Vec<MapNode>,
    edges: Vec<MapEdge>,
    policy: EdgePolicy,
    next_qr: u32,
}

impl Default for MapGraphEditor {
    fn default() -> Self {
        Self::new(EdgePolicy::default())
    }
}

impl MapGraphEditor {
    pub fn new(policy: EdgePolicy) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            policy,
            next_qr: 1,
        }
    }

    /// Editor pre-loaded with the sample building shown on first launch
    pub fn with_demo_data(policy: EdgePolicy) -> Self {
        let now = Utc::now();

        let nodes = vec![
            MapNode {
                id: "1".to_string(),
                name: "Main Entrance".to_string(),
                node_type: NodeType::Entrance,
                coordinates: Coordinates::new(100, 100),
                floor: 1,
                accessible: true,
                qr_code: Some("QR001".to_string()),
                created_at: now,
            },
            MapNode {
                id: "2".to_string(),
                name: "Conference Room A".to_string(),
                node_type: NodeType::Room,
                coordinates: Coordinates::new(200, 150),
                floor: 1,
                accessible: true,
                qr_code: Some("QR002".to_string()),
                created_at: now,
            },
        ];

        let edges = vec![MapEdge {
            id: "e1".to_string(),
            start: "1".to_string(),
            end: "2".to_string(),
            distance: 50.0,
            accessible: true,
            created_at: now,
        }];

        Self {
            nodes,
            edges,
            policy,
            next_qr: 3,
        }
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[MapEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&MapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&MapEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn edges_for_node<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a MapEdge> {
        self.edges.iter().filter(move |e| e.touches(node_id))
    }

    /// Create a node from a form draft.
    ///
    /// Requires a non-blank name, coordinates, and a floor of at least 1.
    /// Unset type, floor and accessibility default to room, 1 and accessible.
    pub fn add_node(&mut self, draft: NodeDraft) -> CoreResult<MapNode> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("name", "Node name is required"));
        }

        let coordinates = draft
            .coordinates
            .ok_or_else(|| CoreError::validation("coordinates", "Coordinates are required"))?;

        let floor = draft.floor.unwrap_or(1);
        if floor < 1 {
            return Err(CoreError::validation(
                "floor",
                format!("Floor must be 1 or greater, got {}", floor),
            ));
        }

        let node = MapNode {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            node_type: draft.node_type.unwrap_or_default(),
            coordinates,
            floor,
            accessible: draft.accessible.unwrap_or(true),
            qr_code: Some(self.issue_qr_code()),
            created_at: Utc::now(),
        };

        info!(
            "Added node {} '{}' ({}) on floor {}",
            node.id, node.name, node.node_type, node.floor
        );
        self.nodes.push(node.clone());

        Ok(node)
    }

    /// Create a path from a form draft.
    ///
    /// Both endpoints must be filled in and the distance must be a finite,
    /// non-zero number of meters. Whether the endpoints name real, distinct,
    /// not-yet-connected nodes is only checked under [`EdgePolicy::Strict`].
    pub fn add_edge(&mut self, draft: EdgeDraft) -> CoreResult<MapEdge> {
        let start = draft.start.trim();
        let end = draft.end.trim();

        if start.is_empty() {
            return Err(CoreError::validation("start", "Start node is required"));
        }
        if end.is_empty() {
            return Err(CoreError::validation("end", "End node is required"));
        }
        if draft.distance == 0.0 || !draft.distance.is_finite() {
            return Err(CoreError::validation(
                "distance",
                "Distance must be a non-zero number of meters",
            ));
        }

        if self.policy == EdgePolicy::Strict {
            self.check_strict(start, end)?;
        }

        let edge = MapEdge {
            id: Uuid::new_v4().to_string(),
            start: start.to_string(),
            end: end.to_string(),
            distance: draft.distance,
            accessible: draft.accessible.unwrap_or(true),
            created_at: Utc::now(),
        };

        info!(
            "Added edge {} {} -> {} ({}m)",
            edge.id, edge.start, edge.end, edge.distance
        );
        self.edges.push(edge.clone());

        Ok(edge)
    }

    /// Delete a node and every edge that starts or ends at it.
    ///
    /// An unknown id is reported as not found and changes nothing.
    pub fn delete_node(&mut self, id: &str) -> CoreResult<NodeRemoval> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| CoreError::not_found("Node", id))?;

        let node = self.nodes.remove(index);

        let (removed_edges, kept_edges): (Vec<MapEdge>, Vec<MapEdge>) =
            std::mem::take(&mut self.edges)
                .into_iter()
                .partition(|e| e.touches(id));
        self.edges = kept_edges;

        info!(
            "Deleted node {} '{}' and {} connected edge(s)",
            node.id,
            node.name,
            removed_edges.len()
        );

        Ok(NodeRemoval {
            node,
            removed_edges,
        })
    }

    /// Delete a single edge; an unknown id is reported as not found
    pub fn delete_edge(&mut self, id: &str) -> CoreResult<MapEdge> {
        let index = self
            .edges
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::not_found("Edge", id))?;

        let edge = self.edges.remove(index);
        info!("Deleted edge {}", edge.id);

        Ok(edge)
    }

    /// Human readable "start → end" label; unknown endpoints show as "?"
    pub fn describe_edge(&self, edge: &MapEdge) -> String {
        let name_of = |id: &str| {
            self.node(id)
                .map(|n| n.name.clone())
                .unwrap_or_else(|| String::from("?"))
        };

        format!("{} \u{2192} {}", name_of(&edge.start), name_of(&edge.end))
    }

    pub fn stats(&self) -> GraphStats {
        let floors: BTreeSet<i32> = self.nodes.iter().map(|n| n.floor).collect();

        GraphStats {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            floors: floors.len(),
            accessible_nodes: self.nodes.iter().filter(|n| n.accessible).count(),
        }
    }

    fn check_strict(&self, start: &str, end: &str) -> CoreResult<()> {
        if self.node(start).is_none() {
            return Err(CoreError::not_found("Node", start));
        }
        if self.node(end).is_none() {
            return Err(CoreError::not_found("Node", end));
        }
        if start == end {
            return Err(CoreError::validation(
                "end",
                "A path cannot start and end at the same node",
            ));
        }
        if self.edges.iter().any(|e| e.connects_same_pair(start, end)) {
            return Err(CoreError::validation(
                "end",
                "These nodes are already connected",
            ));
        }
        Ok(())
    }

    fn issue_qr_code(&mut self) -> String {
        let code = format!("QR{:03}", self.next_qr);
        self.next_qr += 1;
        code
    }
}
