pub mod edge_dto;
pub mod edge_list_response;
pub mod edge_response;
pub mod edges;
