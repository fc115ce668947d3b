mod identity;
mod node_type;
mod role;
mod theme;
