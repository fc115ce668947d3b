//! Session store - who is signed in and which theme is active.
//!
//! Both values are resolved once when the store is opened and every change is
//! written through to the backing [`KeyValueStore`] before the call returns.

use crate::{
    CoreError, CoreResult, CredentialVerifier, DEFAULT_ADMIN_EMAIL, Identity, KeyValueStore,
    MockCredentialVerifier, SessionSnapshot, THEME_KEY, Theme, USER_KEY,
};

use std::sync::Arc;

use log::{debug, info, warn};

pub struct SessionStore {
    storage: Box<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
    admin_email: String,
    user: Option<Identity>,
    theme: Theme,
}

impl SessionStore {
    /// Open a session over `storage`.
    ///
    /// Theme resolution order: stored value, then the `prefers_dark`
    /// environment hint (which is `false` when the host gives none). An empty
    /// stored theme counts as unset. A stored
    /// identity that cannot be parsed is discarded and the session starts
    /// signed out.
    pub fn open(storage: Box<dyn KeyValueStore>, prefers_dark: bool) -> CoreResult<Self> {
        let mut storage = storage;

        let theme = match storage.get(THEME_KEY)? {
            Some(saved) if !saved.trim().is_empty() => {
                Theme::from_dark(saved == Theme::Dark.as_str())
            }
            _ => Theme::from_dark(prefers_dark),
        };

        let user = match storage.get(USER_KEY)? {
            Some(saved) => match serde_json::from_str::<Identity>(&saved) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    warn!("Discarding unreadable stored identity: {}", e);
                    storage.remove(USER_KEY)?;
                    None
                }
            },
            None => None,
        };

        // The active theme is always mirrored to storage, even when it came from the hint
        storage.set(THEME_KEY, theme.as_str())?;

        debug!(
            "Session opened: theme={}, user={}",
            theme,
            user.as_ref().map(|u| u.email.as_str()).unwrap_or("none")
        );

        Ok(Self {
            storage,
            verifier: Arc::new(MockCredentialVerifier),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            user,
            theme,
        })
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Logins are trimmed before comparison, so the admin address is too
    pub fn with_admin_email(mut self, admin_email: impl Into<String>) -> Self {
        self.admin_email = admin_email.into().trim().to_string();
        self
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    /// Sign in as `email`.
    ///
    /// The credential exchange is delegated to the configured verifier; on
    /// success the derived identity becomes current and is persisted under
    /// the `"user"` key. On failure the previous session is left as it was.
    pub async fn login(&mut self, email: &str, password: &str) -> CoreResult<Identity> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CoreError::validation("email", "Email is required"));
        }

        if let Err(e) = self.verifier.verify(email, password).await {
            warn!("Login failed for {}: {}", email, e);
            return Err(e);
        }

        let identity = Identity::from_login(email, &self.admin_email);
        let serialized = serde_json::to_string(&identity)?;
        self.storage.set(USER_KEY, &serialized)?;

        info!("Logged in {} as {}", identity.email, identity.role);
        self.user = Some(identity.clone());

        Ok(identity)
    }

    /// Sign out. Calling this while signed out is a no-op.
    pub fn logout(&mut self) -> CoreResult<()> {
        self.storage.remove(USER_KEY)?;

        if let Some(identity) = self.user.take() {
            info!("Logged out {}", identity.email);
        }

        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> CoreResult<()> {
        self.storage.set(THEME_KEY, theme.as_str())?;
        debug!("Theme set to {}", theme);
        self.theme = theme;
        Ok(())
    }

    pub fn set_dark(&mut self, dark: bool) -> CoreResult<()> {
        self.set_theme(Theme::from_dark(dark))
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle_theme(&mut self) -> CoreResult<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(Identity::is_admin)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            is_admin: self.is_admin(),
            theme: self.theme,
        }
    }

    /// Raw access to the backing storage, mainly for inspection in tests
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }
}
