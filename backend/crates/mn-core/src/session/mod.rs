pub mod credential_verifier;
pub mod session_snapshot;
pub mod session_store;
