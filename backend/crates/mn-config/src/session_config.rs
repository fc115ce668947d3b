use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_STORAGE_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Durable session storage file, relative to the config directory
    pub storage_path: String,
    /// The address that signs in with the admin role
    pub admin_email: String,
    /// Host color-scheme hint, consulted only when no theme has been stored
    pub prefers_dark: Option<bool>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: String::from(DEFAULT_STORAGE_FILENAME),
            admin_email: String::from(DEFAULT_ADMIN_EMAIL),
            prefers_dark: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.storage_path);
        if self.storage_path.trim().is_empty() || path.is_absolute() || self.storage_path.contains("..")
        {
            return Err(ConfigError::session(
                "session.storage_path must be a non-empty relative path without '..'",
            ));
        }

        let email = self.admin_email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ConfigError::session(format!(
                "session.admin_email must be an email address, got '{}'",
                self.admin_email
            )));
        }

        Ok(())
    }
}
