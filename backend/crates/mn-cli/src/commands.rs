use crate::{
    edge_commands::EdgeCommands, node_commands::NodeCommands, session_commands::SessionCommands,
    theme_commands::ThemeCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Session operations (login, logout, current identity)
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },

    /// Map node operations (admin only)
    Node {
        #[command(subcommand)]
        action: NodeCommands,
    },

    /// Map edge operations (admin only)
    Edge {
        #[command(subcommand)]
        action: EdgeCommands,
    },

    /// Map graph summary (admin only)
    Stats,
}
