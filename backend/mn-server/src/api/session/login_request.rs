use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,

    /// Checked by the configured credential verifier
    #[serde(default)]
    pub password: String,
}
