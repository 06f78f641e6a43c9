//! Landing page handler

use axum::Json;
use serde::Serialize;

use domain_pa::Role;

#[derive(Debug, Serialize)]
pub struct RoleLink {
    pub role: Role,
    pub label: &'static str,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct LandingResponse {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub roles: Vec<RoleLink>,
    pub login: &'static str,
}

/// The landing payload
pub async fn index() -> Json<LandingResponse> {
    let roles = Role::all()
        .into_iter()
        .map(|role| RoleLink {
            role,
            label: match role {
                Role::Pharmacy => "Pharmacy Dashboard",
                Role::Provider => "Provider Portal",
                Role::Payer => "Payer Interface",
                Role::Patient => "Patient View",
            },
            path: format!("/{role}"),
        })
        .collect();

    Json(LandingResponse {
        name: "MedAuth Pro",
        tagline: "Prior Authorization Platform",
        description: "Streamline prior authorization requests across pharmacies, providers, payers, and patients",
        roles,
        login: "/login",
    })
}
