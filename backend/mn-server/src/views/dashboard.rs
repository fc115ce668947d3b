//! Mock user dashboard with sample location and activity data

use crate::AppState;
use crate::api::error::Result as ApiResult;
use crate::views::layout::PageShell;

use mn_core::SessionSnapshot;

use askama::Template;
use axum::{extract::State, response::Html};

const SAMPLE_LOCATION: &str = "Building A - Floor 2 - Room 205";

pub struct RecentSearch {
    pub query: &'static str,
    pub result: &'static str,
    pub time: &'static str,
}

const RECENT_SEARCHES: [RecentSearch; 3] = [
    RecentSearch {
        query: "Prof. Sharma's office",
        result: "Room 302, Building B",
        time: "2 mins ago",
    },
    RecentSearch {
        query: "Library",
        result: "Building C, Floor 1",
        time: "15 mins ago",
    },
    RecentSearch {
        query: "Cafeteria",
        result: "Building A, Ground Floor",
        time: "1 hour ago",
    },
];

const QUICK_ACTIONS: [&str; 4] = ["Scan QR Code", "Voice Search", "Report Issue", "Settings"];

const SUGGESTIONS: [&str; 4] = ["Library", "Cafeteria", "Admin Office", "Parking"];

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub page: PageShell<'a>,
    pub user_name: Option<&'a str>,
    pub location: &'static str,
    pub suggestions: &'static [&'static str],
    pub searches: &'static [RecentSearch],
    pub actions: &'static [&'static str],
}

/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let session = state.session.lock().await.snapshot();
    Ok(Html(render_dashboard(&session)?))
}

pub fn render_dashboard(session: &SessionSnapshot) -> askama::Result<String> {
    DashboardTemplate {
        page: PageShell::new("Dashboard", session, "/dashboard"),
        user_name: session.user.as_ref().map(|user| user.name.as_str()),
        location: SAMPLE_LOCATION,
        suggestions: &SUGGESTIONS,
        searches: &RECENT_SEARCHES,
        actions: &QUICK_ACTIONS,
    }
    .render()
}
