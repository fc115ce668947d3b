use crate::EdgeDto;
use serde::Serialize;

/// List of map edges response, in insertion order
#[derive(Debug, Serialize)]
pub struct EdgeListResponse {
    pub edges: Vec<EdgeDto>,
}
