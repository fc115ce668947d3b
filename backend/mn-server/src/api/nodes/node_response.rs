use crate::NodeDto;
use serde::Serialize;

/// Single map node response
#[derive(Debug, Serialize)]
pub struct NodeResponse {
    pub node: NodeDto,
}
