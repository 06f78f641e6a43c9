//! Request handlers

pub mod health;
pub mod landing;
pub mod login;
pub mod patient;
pub mod payer;
pub mod pharmacy;
pub mod provider;

use axum::{http::StatusCode, Json};
use serde::Deserialize;

use core_kernel::RequestId;

use crate::error::{ApiError, ErrorResponse};

/// `?tab=` query parameters, defaulting to the overview
#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
    /// Optional status filter for tracking tables; accepts the canonical
    /// wire forms and the legacy per-role aliases
    pub status: Option<String>,
}

impl TabQuery {
    pub fn tab(&self) -> String {
        self.tab.clone().unwrap_or_else(|| "overview".to_string())
    }

    pub fn status_filter(&self) -> Option<domain_pa::PaStatus> {
        self.status
            .as_deref()
            .filter(|s| *s != "all")
            .and_then(domain_pa::PaStatus::from_legacy)
    }
}

/// Parses a `PAnnn` path segment
pub fn parse_request_id(id: &str) -> Result<RequestId, ApiError> {
    id.parse::<RequestId>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Catch-all for unmatched routes
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not_found".to_string(),
            message: "Page not found".to_string(),
            details: None,
        }),
    )
}
