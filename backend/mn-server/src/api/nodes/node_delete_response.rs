use serde::Serialize;

/// Response for a node delete, listing the edges removed with it
#[derive(Debug, Serialize)]
pub struct NodeDeleteResponse {
    pub deleted_id: String,
    pub removed_edge_ids: Vec<String>,
}
