//! Identity - the currently signed-in user of the front end.

use crate::Role;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    /// Build the identity a login with `email` yields.
    ///
    /// Everything is derived from the address: the same email always maps to
    /// the same id, and only `admin_email` receives the admin role.
    pub fn from_login(email: &str, admin_email: &str) -> Self {
        let role = if email == admin_email {
            Role::Admin
        } else {
            Role::User
        };

        let name = match role {
            Role::Admin => "Admin User",
            Role::User => "Regular User",
        };

        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_URL, format!("mailto:{email}").as_bytes())
                .to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: Some(format!("{AVATAR_BASE_URL}?seed={email}")),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
