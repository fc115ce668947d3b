use serde::Serialize;

/// Response for a single deleted resource
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
