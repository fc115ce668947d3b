pub mod node_delete_response;
pub mod node_dto;
pub mod node_list_response;
pub mod node_response;
pub mod nodes;
