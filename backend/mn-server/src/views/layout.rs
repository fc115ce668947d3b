//! Page shell shared by every template: title, theme and navbar state

use mn_core::{Identity, SessionSnapshot};

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Features", "/#features"),
    ("Industries", "/#industries"),
    ("Dashboard", "/dashboard"),
    ("Contact", "/#contact"),
];

/// Navbar entry
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    pub active: bool,
}

/// Values `base.html` and `navbar.html` read from every page template
pub struct PageShell<'a> {
    pub title: &'static str,
    pub user: Option<&'a Identity>,
    /// Class on the root element, `Some("dark")` for the dark theme
    pub root_class: Option<&'static str>,
    pub toggle_label: &'static str,
    pub nav_links: Vec<NavLink>,
}

impl<'a> PageShell<'a> {
    /// Fixed navbar items, then "Admin" for admins only
    pub fn new(title: &'static str, session: &'a SessionSnapshot, current_path: &str) -> Self {
        let mut nav_links: Vec<NavLink> = NAV_ITEMS
            .iter()
            .map(|&(name, href)| NavLink {
                name,
                href,
                active: href == current_path,
            })
            .collect();

        if session.is_admin {
            nav_links.push(NavLink {
                name: "Admin",
                href: "/admin",
                active: current_path == "/admin",
            });
        }

        let toggle_label = if session.theme.is_dark() {
            "Light mode"
        } else {
            "Dark mode"
        };

        Self {
            title,
            user: session.user.as_ref(),
            root_class: session.theme.root_class(),
            toggle_label,
            nav_links,
        }
    }
}
