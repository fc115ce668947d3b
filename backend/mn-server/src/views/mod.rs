//! Server-rendered pages.
//!
//! Navigation, search and QR controls are inert placeholders; only the
//! session controls and the admin map editor talk to the API.

pub mod admin;
pub mod dashboard;
pub mod home;
pub mod layout;
