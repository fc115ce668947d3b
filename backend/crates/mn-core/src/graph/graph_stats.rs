use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    /// Number of distinct floors that hold at least one node
    pub floors: usize,
    pub accessible_nodes: usize,
}
