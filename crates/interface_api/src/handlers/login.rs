//! Login and sign-out handlers
//!
//! Login accepts any non-empty email and password; no credentials are
//! verified. A recognized role gets a session token and a redirect to its
//! dashboard, anything else redirects home. Sign-out is a pure redirect
//! with no session teardown.

use axum::{extract::State, Json};

use domain_pa::Role;

use crate::auth::{create_token, display_name_for};
use crate::dto::requests::{LoginRequest, LoginResponse, LogoutResponse};
use crate::error::ApiError;
use crate::AppState;

/// Simulated login
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if form.email.trim().is_empty() || form.password.trim().is_empty() || form.role.trim().is_empty()
    {
        return Err(ApiError::Validation("Please fill in all fields".to_string()));
    }

    match form.role.trim().parse::<Role>() {
        Ok(role) => {
            let token = create_token(
                form.email.trim(),
                role,
                &state.config.jwt_secret,
                state.config.jwt_expiration_secs,
            )
            .map_err(|e| ApiError::Internal(e.to_string()))?;

            tracing::info!(role = %role, name = display_name_for(role), "login");

            Ok(Json(LoginResponse {
                toast: format!("Logged in as {role}"),
                redirect: format!("/{role}"),
                token: Some(token),
            }))
        }
        Err(_) => Ok(Json(LoginResponse {
            toast: format!("Logged in as {}", form.role.trim()),
            redirect: "/".to_string(),
            token: None,
        })),
    }
}

/// Sign-out: a redirect and nothing else
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { redirect: "/" })
}
