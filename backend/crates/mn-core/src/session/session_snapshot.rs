use crate::{Identity, Theme};

use serde::{Deserialize, Serialize};

/// Read-only view of the session handed to pages and API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: Option<Identity>,
    pub is_admin: bool,
    pub theme: Theme,
}
