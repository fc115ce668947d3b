use crate::CoreResult;

use async_trait::async_trait;

/// Checks a submitted email/password pair before a session is established
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> CoreResult<()>;
}

/// Accepts every credential pair.
///
/// MicroNav has no credential store yet; this stands in for the backend
/// exchange so the login flow keeps its async shape and failure path.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCredentialVerifier;

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, _email: &str, _password: &str) -> CoreResult<()> {
        Ok(())
    }
}
