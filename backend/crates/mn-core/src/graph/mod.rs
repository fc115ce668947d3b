pub mod edge_policy;
pub mod graph_stats;
pub mod map_graph_editor;
pub mod node_removal;
