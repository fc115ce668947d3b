use crate::{Coordinates, NodeType};

use serde::{Deserialize, Serialize};

/// Partially filled "Add New Node" form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub node_type: Option<NodeType>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub accessible: Option<bool>,
}

impl NodeDraft {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates: Some(coordinates),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }

    pub fn with_floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = Some(accessible);
        self
    }
}
