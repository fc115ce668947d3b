pub mod error;
pub mod graph;
pub mod models;
pub mod session;
pub mod storage;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use graph::edge_policy::EdgePolicy;
pub use graph::graph_stats::GraphStats;
pub use graph::map_graph_editor::MapGraphEditor;
pub use graph::node_removal::NodeRemoval;
pub use models::coordinates::Coordinates;
pub use models::edge_draft::EdgeDraft;
pub use models::identity::Identity;
pub use models::map_edge::MapEdge;
pub use models::map_node::MapNode;
pub use models::node_draft::NodeDraft;
pub use models::node_type::NodeType;
pub use models::role::Role;
pub use models::theme::Theme;
pub use session::credential_verifier::{CredentialVerifier, MockCredentialVerifier};
pub use session::session_snapshot::SessionSnapshot;
pub use session::session_store::SessionStore;
pub use storage::json_file_store::JsonFileStore;
pub use storage::key_value_store::KeyValueStore;
pub use storage::memory_store::MemoryStore;

/// Durable storage key holding the serialized current identity
pub const USER_KEY: &str = "user";
/// Durable storage key holding `"dark"` or `"light"`
pub const THEME_KEY: &str = "theme";
/// The single address that logs in with the admin role
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@micronav.com";
