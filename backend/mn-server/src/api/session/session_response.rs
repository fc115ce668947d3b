use mn_core::SessionSnapshot;

use serde::Serialize;

/// Current session response
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: SessionSnapshot,
}
