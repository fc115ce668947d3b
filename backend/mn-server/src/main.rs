use mn_core::{EdgePolicy, JsonFileStore, MapGraphEditor, SessionStore};
use mn_server::{AppState, build_router, logger};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // MN_* overrides may come from a .env file
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = mn_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting mn-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open durable session storage
    let storage_path = config.storage_path()?;
    info!("Opening session storage: {}", storage_path.display());
    let storage = JsonFileStore::open(&storage_path)?;

    let prefers_dark = config.session.prefers_dark.unwrap_or(false);
    let session = SessionStore::open(Box::new(storage), prefers_dark)?
        .with_admin_email(config.session.admin_email.clone());

    // The map graph lives in memory only and starts fresh on every launch
    let policy = EdgePolicy::from_strict(config.graph.strict_edges);
    let graph = if config.graph.seed_demo_data {
        MapGraphEditor::with_demo_data(policy)
    } else {
        MapGraphEditor::new(policy)
    };
    info!(
        "Map graph ready: {} node(s), {} edge(s), {:?} edge policy",
        graph.nodes().len(),
        graph.edges().len(),
        policy
    );

    let app = build_router(AppState::new(session, graph));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on http://{}", actual_addr);
    if config.server.host == "0.0.0.0" {
        warn!("Listening on all interfaces; the session is shared by every client");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
