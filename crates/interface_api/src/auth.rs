//! Session tokens and role scoping
//!
//! Login performs no credential verification: any non-empty email and
//! password mint a token for the selected role. The token is what scopes a
//! dashboard to its role; sign-out is a client-side redirect and no token
//! is revoked.

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use domain_pa::Role;

use crate::error::ApiError;

/// Session claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (login email)
    pub sub: String,
    /// Dashboard role
    pub role: Role,
    /// Display name shown in the layout shell
    pub name: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
}

/// The demo account presented for each role
pub fn display_name_for(role: Role) -> &'static str {
    match role {
        Role::Pharmacy => "City Pharmacy",
        Role::Provider => "Dr. Sarah Johnson",
        Role::Payer => "BlueCross Gold",
        Role::Patient => "Jane Doe",
    }
}

/// Creates a new session token
///
/// # Arguments
///
/// * `email` - Login email (kept as the subject, never verified)
/// * `role` - Selected dashboard role
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    email: &str,
    role: Role,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: email.to_string(),
        role,
        name: display_name_for(role).to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a session token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            AuthError::TokenExpired
        } else {
            AuthError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}

/// Extractor for the authenticated session
///
/// The auth middleware validates the bearer token and stores the claims in
/// request extensions; handlers pull them out through this extractor.
#[derive(Debug, Clone)]
pub struct Session(pub Claims);

impl Session {
    /// Rejects sessions whose role does not match the dashboard
    pub fn require(&self, role: Role) -> Result<(), ApiError> {
        if self.0.role == role {
            Ok(())
        } else {
            Err(ApiError::Forbidden(format!(
                "this dashboard requires the {role} role"
            )))
        }
    }

    /// The display name for the layout shell
    pub fn display_name(&self) -> &str {
        &self.0.name
    }

    /// The subject (login email)
    pub fn actor(&self) -> &str {
        &self.0.sub
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(Session)
            .ok_or(ApiError::Unauthorized)
    }
}
