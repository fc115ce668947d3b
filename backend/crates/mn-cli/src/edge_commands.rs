use clap::Subcommand;

#[derive(Subcommand)]
pub enum EdgeCommands {
    /// List all edges
    List,
    /// Add an edge between two nodes
    Add {
        /// Start node ID
        #[arg(long)]
        start: String,

        /// End node ID
        #[arg(long)]
        end: String,

        /// Distance in meters
        #[arg(long, allow_hyphen_values = true)]
        distance: f64,

        /// Wheelchair accessible (defaults to true)
        #[arg(long)]
        accessible: Option<bool>,
    },
    /// Delete an edge
    Delete {
        /// Edge ID
        id: String,
    },
}
