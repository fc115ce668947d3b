pub mod login_request;
pub mod session;
pub mod session_response;
pub mod theme_request;
