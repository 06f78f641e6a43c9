//! HTTP API Layer
//!
//! This crate provides the REST API for the prior-authorization system
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one module per role dashboard, plus login and landing
//! - **Middleware**: session validation, request audit logging
//! - **DTOs**: layout shell, dashboard tabs, request/response bodies
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{CollaboratorConfig, CollaboratorSource, CoreError};
use domain_pa::{AuditSink, PaRepository};
use infra_store::MemoryPaStore;

use crate::config::ApiConfig;
use crate::handlers::{health, landing, login, patient, payer, pharmacy, provider};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn PaRepository>,
    pub audit: Arc<dyn AuditSink>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds state around the seeded in-memory store
    pub fn seeded(config: ApiConfig) -> Self {
        Self::with_store(Arc::new(MemoryPaStore::seeded()), config)
    }

    /// Builds state around an explicit store (used by tests)
    pub fn with_store(store: Arc<MemoryPaStore>, config: ApiConfig) -> Self {
        Self {
            repo: store.clone(),
            audit: store,
            config,
        }
    }

    /// Builds state according to the collaborator wiring
    ///
    /// Only the bundled in-memory store and audit sink are available in
    /// this deployment; external sources are declared seams, not wired
    /// adapters, and selecting one is a configuration error.
    pub fn from_collaborators(
        config: ApiConfig,
        collaborators: &CollaboratorConfig,
    ) -> Result<Self, CoreError> {
        match (&collaborators.store_source, &collaborators.audit_source) {
            (CollaboratorSource::Memory, CollaboratorSource::Memory) => Ok(Self::seeded(config)),
            _ => Err(CoreError::Configuration(
                "external store/audit collaborators are not wired in this deployment".to_string(),
            )),
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Application state (store, audit sink, configuration)
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/", get(landing::index))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/login", post(login::login))
        .route("/logout", post(login::logout));

    // Pharmacy dashboard
    let pharmacy_routes = Router::new()
        .route("/", get(pharmacy::dashboard))
        .route("/requests", post(pharmacy::submit_request))
        .route("/requests/:id/info", post(pharmacy::supply_info));

    // Provider portal
    let provider_routes = Router::new()
        .route("/", get(provider::dashboard))
        .route("/requests/:id/sign", post(provider::sign_request));

    // Payer interface
    let payer_routes = Router::new()
        .route("/", get(payer::dashboard))
        .route("/requests/:id/review", post(payer::complete_review))
        .route("/requests/:id/decision", post(payer::decide))
        .route("/requests/:id/signature-request", post(payer::request_signature));

    // Patient view
    let patient_routes = Router::new().route("/", get(patient::dashboard));

    // Session-scoped dashboard routes
    let dashboard_routes = Router::new()
        .nest("/pharmacy", pharmacy_routes)
        .nest("/provider", provider_routes)
        .nest("/payer", payer_routes)
        .nest("/patient", patient_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .merge(dashboard_routes)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
