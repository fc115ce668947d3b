pub mod coordinates;
pub mod edge_draft;
pub mod identity;
pub mod map_edge;
pub mod map_node;
pub mod node_draft;
pub mod node_type;
pub mod role;
pub mod theme;
