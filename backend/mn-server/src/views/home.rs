//! Landing page: hero, industries and features

use crate::AppState;
use crate::api::error::Result as ApiResult;
use crate::views::layout::PageShell;

use mn_core::SessionSnapshot;

use askama::Template;
use axum::{extract::State, response::Html};

/// Title and blurb shown in the landing page carousels
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

const INDUSTRIES: [Card; 6] = [
    Card {
        title: "Smart Buildings & Facilities",
        description: "Room-level tracking for offices, campuses, hospitals, and malls",
    },
    Card {
        title: "Healthcare Navigation",
        description: "Locate patients, staff, and equipment inside hospitals efficiently",
    },
    Card {
        title: "Campus Solutions",
        description: "Help students and visitors navigate complex university buildings",
    },
    Card {
        title: "Retail Enhancement",
        description: "Personalized customer navigation and in-store analytics",
    },
    Card {
        title: "Emergency Management",
        description: "Real-time tracking during evacuations in high-rise buildings",
    },
    Card {
        title: "Analytics & Insights",
        description: "Track foot traffic patterns and optimize space utilization",
    },
];

const FEATURES: [Card; 6] = [
    Card {
        title: "Multi-User Support",
        description: "Designed for thousands of concurrent users",
    },
    Card {
        title: "Real-Time Updates",
        description: "Live tracking and instant route adjustments",
    },
    Card {
        title: "Accessibility First",
        description: "Wheelchair-friendly routes and voice guidance",
    },
    Card {
        title: "Multi-Language",
        description: "Support for English, Hindi, and more languages",
    },
    Card {
        title: "Lightning Fast",
        description: "Sub-second response times for all queries",
    },
    Card {
        title: "Enterprise Grade",
        description: "Security and reliability for mission-critical applications",
    },
];

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub page: PageShell<'a>,
    pub signed_in: bool,
    pub industries: &'static [Card],
    pub features: &'static [Card],
}

/// GET /
pub async fn home(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let session = state.session.lock().await.snapshot();
    Ok(Html(render_home(&session)?))
}

pub fn render_home(session: &SessionSnapshot) -> askama::Result<String> {
    HomeTemplate {
        page: PageShell::new("Home", session, "/"),
        signed_in: session.user.is_some(),
        industries: &INDUSTRIES,
        features: &FEATURES,
    }
    .render()
}
