//! mn-cli library
//!
//! Exports the HTTP client and the command tree used by the `micronav` binary.

pub mod cli;
pub mod client;
pub mod commands;
pub mod edge_commands;
pub mod node_commands;
pub mod session_commands;
pub mod theme_commands;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
