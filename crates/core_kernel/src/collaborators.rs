//! Collaborator configuration
//!
//! The prior-authorization workflow names several collaborators that live
//! outside this service: an authentication service, a persistent request
//! store, a document storage service, a notification service, and an audit
//! sink. This deployment bundles in-memory implementations for the store and
//! audit sink; the others are declared here so the wiring seam exists when a
//! real adapter is introduced.

use std::collections::HashMap;

/// Source selection for a collaborator
#[derive(Debug, Clone, Default)]
pub enum CollaboratorSource {
    /// Use the bundled in-memory implementation
    #[default]
    Memory,

    /// Use an external system with the given configuration
    External(ExternalConfig),
}

/// Configuration for an external collaborator
#[derive(Debug, Clone, Default)]
pub struct ExternalConfig {
    /// Base URL of the external system
    pub base_url: String,

    /// API key for authentication
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Additional headers to include in requests
    pub headers: HashMap<String, String>,
}

impl ExternalConfig {
    /// Creates a new external config with a base URL and API key
    pub fn simple(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(api_key.into()),
            timeout_secs: 30,
            ..Default::default()
        }
    }
}

/// Source configuration for every named collaborator
#[derive(Debug, Clone, Default)]
pub struct CollaboratorConfig {
    /// Authentication / authorization service
    pub auth_source: CollaboratorSource,

    /// Prior-authorization request store
    pub store_source: CollaboratorSource,

    /// Document upload / storage service
    pub document_source: CollaboratorSource,

    /// Notification / messaging service
    pub notification_source: CollaboratorSource,

    /// Audit-log sink
    pub audit_source: CollaboratorSource,
}

impl CollaboratorConfig {
    /// Creates a configuration with every collaborator in-memory
    pub fn all_memory() -> Self {
        Self::default()
    }

    /// Sets the request store to an external system
    pub fn with_external_store(mut self, config: ExternalConfig) -> Self {
        self.store_source = CollaboratorSource::External(config);
        self
    }

    /// Sets the audit sink to an external system
    pub fn with_external_audit(mut self, config: ExternalConfig) -> Self {
        self.audit_source = CollaboratorSource::External(config);
        self
    }
}
