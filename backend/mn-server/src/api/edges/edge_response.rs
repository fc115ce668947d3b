use crate::EdgeDto;
use serde::Serialize;

/// Single map edge response
#[derive(Debug, Serialize)]
pub struct EdgeResponse {
    pub edge: EdgeDto,
}
