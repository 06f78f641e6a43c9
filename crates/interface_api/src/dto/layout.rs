//! Layout shell
//!
//! Every dashboard response carries the chrome the client renders around
//! the tab content: role label, display name, the ordered sidebar entries
//! with exactly one active for a known tab, and the sign-out target.

use serde::Serialize;

use domain_pa::Role;

/// A sidebar navigation entry
#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    /// Tab identifier, used as the `?tab=` value
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// Dashboard chrome
#[derive(Debug, Clone, Serialize)]
pub struct LayoutShell {
    pub role_label: &'static str,
    pub display_name: String,
    pub nav: Vec<NavEntry>,
    /// Sign-out is a plain redirect; there is no session teardown
    pub sign_out: &'static str,
}

/// The sidebar entries for a role, in display order
pub fn nav_entries(role: Role) -> &'static [(&'static str, &'static str, &'static str)] {
    match role {
        Role::Pharmacy => &[
            ("overview", "Overview", "home"),
            ("new-request", "New PA Request", "plus"),
            ("track-requests", "Track Requests", "search"),
            ("upload-docs", "Upload Documents", "upload"),
            ("patients", "Patients", "users"),
            ("settings", "Settings", "settings"),
        ],
        Role::Provider => &[
            ("overview", "Overview", "home"),
            ("pa-requests", "PA Requests", "file-text"),
            ("patients", "Patients", "users"),
            ("signature", "Digital Signature", "pen-tool"),
            ("settings", "Settings", "settings"),
        ],
        Role::Payer => &[
            ("overview", "Overview", "home"),
            ("incoming", "Incoming Requests", "file-text"),
            ("decisions", "Decision Panel", "check-circle"),
            ("analytics", "Analytics", "bar-chart"),
            ("audit", "Audit Logs", "search"),
            ("settings", "Settings", "settings"),
        ],
        Role::Patient => &[("overview", "My Requests", "home")],
    }
}

impl LayoutShell {
    /// Builds the shell for a role with the given tab marked active
    ///
    /// An unknown tab leaves every entry inactive, matching the
    /// fall-through placeholder content.
    pub fn for_role(role: Role, display_name: &str, active_tab: &str) -> Self {
        let role_label = match role {
            Role::Pharmacy => "Pharmacy",
            Role::Provider => "Provider",
            Role::Payer => "Payer",
            Role::Patient => "Patient",
        };

        let nav = nav_entries(role)
            .iter()
            .map(|(id, label, icon)| NavEntry {
                id,
                label,
                icon,
                active: *id == active_tab,
            })
            .collect();

        Self {
            role_label,
            display_name: display_name.to_string(),
            nav,
            sign_out: "/logout",
        }
    }

    /// Number of active entries (0 for an unknown tab, otherwise 1)
    pub fn active_count(&self) -> usize {
        self.nav.iter().filter(|e| e.active).count()
    }
}
