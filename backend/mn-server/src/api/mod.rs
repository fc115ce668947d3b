pub mod delete_response;
pub mod edges;
pub mod error;
pub mod extractors;
pub mod nodes;
pub mod session;
pub mod stats;
