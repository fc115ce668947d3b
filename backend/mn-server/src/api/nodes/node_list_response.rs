use crate::NodeDto;
use serde::Serialize;

/// List of map nodes response, in insertion order
#[derive(Debug, Serialize)]
pub struct NodeListResponse {
    pub nodes: Vec<NodeDto>,
}
