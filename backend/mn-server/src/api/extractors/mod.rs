pub mod admin_session;
