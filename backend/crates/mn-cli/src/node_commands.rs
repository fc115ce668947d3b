use clap::Subcommand;

#[derive(Subcommand)]
pub enum NodeCommands {
    /// List all nodes
    List,
    /// Get a node by ID
    Get {
        /// Node ID
        id: String,
    },
    /// Add a node
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, allow_hyphen_values = true)]
        x: i32,

        #[arg(long, allow_hyphen_values = true)]
        y: i32,

        /// Node type (defaults to room)
        #[arg(long, value_parser = ["room", "hallway", "entrance", "elevator", "stairway"])]
        r#type: Option<String>,

        /// Floor number, 1 or higher (defaults to 1)
        #[arg(long)]
        floor: Option<i32>,

        /// Wheelchair accessible (defaults to true)
        #[arg(long)]
        accessible: Option<bool>,
    },
    /// Delete a node and every edge touching it
    Delete {
        /// Node ID
        id: String,
    },
}
