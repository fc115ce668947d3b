mod api;

use crate::AppState;

use mn_core::{EdgePolicy, MapGraphEditor, MemoryStore, SessionStore};

/// State over in-memory storage with the two demo nodes and their edge
pub(crate) fn create_test_state() -> AppState {
    let session = SessionStore::open(Box::new(MemoryStore::new()), false).unwrap();
    AppState::new(session, MapGraphEditor::with_demo_data(EdgePolicy::Permissive))
}

pub(crate) async fn login_as(state: &AppState, email: &str) {
    state
        .session
        .lock()
        .await
        .login(email, "password")
        .await
        .unwrap();
}
