//! micronav - MicroNav CLI
//!
//! Drives a running mn-server: session, theme and the admin map graph.
//!
//! # Examples
//!
//! ```bash
//! # Log in as the admin
//! micronav session login --email admin@micronav.com
//!
//! # Add a node and connect it to the main entrance
//! micronav node add --name "Lab 101" --x 300 --y 120 --type room --pretty
//! micronav edge add --start 1 --end <node-id> --distance 25
//! ```

use mn_cli::{
    Client,
    cli::Cli,
    commands::Commands,
    edge_commands::EdgeCommands,
    node_commands::NodeCommands,
    session_commands::SessionCommands,
    theme_commands::ThemeCommands,
};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Explicit flag > configured bind address
    let server_url = match cli.server {
        Some(url) => url,
        None => match mn_config::Config::load() {
            Ok(config) => config.server_url(),
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                eprintln!();
                eprintln!("Specify a server URL explicitly:");
                eprintln!("  micronav --server http://127.0.0.1:8000 <command>");
                return ExitCode::FAILURE;
            }
        },
    };

    let client = Client::new(&server_url);

    let result = match cli.command {
        Commands::Session { action } => match action {
            SessionCommands::Show => client.get_session().await,
            SessionCommands::Login { email, password } => client.login(&email, &password).await,
            SessionCommands::Logout => client.logout().await,
        },

        Commands::Theme { action } => match action {
            ThemeCommands::Show => client.get_theme().await,
            ThemeCommands::Set { theme } => client.set_theme(theme == "dark").await,
            ThemeCommands::Toggle => client.toggle_theme().await,
        },

        Commands::Node { action } => match action {
            NodeCommands::List => client.list_nodes().await,
            NodeCommands::Get { id } => client.get_node(&id).await,
            NodeCommands::Add {
                name,
                x,
                y,
                r#type,
                floor,
                accessible,
            } => {
                client
                    .create_node(&name, x, y, r#type.as_deref(), floor, accessible)
                    .await
            }
            NodeCommands::Delete { id } => client.delete_node(&id).await,
        },

        Commands::Edge { action } => match action {
            EdgeCommands::List => client.list_edges().await,
            EdgeCommands::Add {
                start,
                end,
                distance,
                accessible,
            } => client.create_edge(&start, &end, distance, accessible).await,
            EdgeCommands::Delete { id } => client.delete_edge(&id).await,
        },

        Commands::Stats => client.stats().await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
