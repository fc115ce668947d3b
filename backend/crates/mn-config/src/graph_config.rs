use crate::{DEFAULT_SEED_DEMO_DATA, DEFAULT_STRICT_EDGES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Start the editor with the sample building instead of an empty map
    pub seed_demo_data: bool,
    /// Require edge endpoints to exist, differ, and not already be connected
    pub strict_edges: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: DEFAULT_SEED_DEMO_DATA,
            strict_edges: DEFAULT_STRICT_EDGES,
        }
    }
}
