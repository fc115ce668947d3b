use mn_core::{MapGraphEditor, SessionStore};

use std::sync::Arc;

use tokio::sync::Mutex;

/// Shared handles injected into every handler and page.
///
/// The session is process-wide: one local user, one store.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SessionStore>>,
    pub graph: Arc<Mutex<MapGraphEditor>>,
}

impl AppState {
    pub fn new(session: SessionStore, graph: MapGraphEditor) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            graph: Arc::new(Mutex::new(graph)),
        }
    }
}
