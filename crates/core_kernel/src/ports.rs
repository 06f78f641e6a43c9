//! Ports and Adapters Infrastructure
//!
//! Foundational types for the hexagonal architecture used across the domain
//! modules. Each domain defines its own port trait (e.g. `PaRepository`,
//! `AuditSink`) extending the marker trait here; adapters implement those
//! traits to provide either the bundled in-memory implementation or an
//! external system.
//!
//! ```rust,ignore
//! // In domain_pa/src/ports.rs
//! #[async_trait]
//! pub trait PaRepository: DomainPort {
//!     async fn get(&self, id: &RequestId) -> Result<PaRequest, PortError>;
//! }
//!
//! // In infra_store - in-memory adapter
//! impl PaRepository for MemoryPaStore { ... }
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Unified error type that all port implementations must use, ensuring
/// consistent error handling across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("PaRequest", "PA001");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("PaRequest"));
        assert!(error.to_string().contains("PA001"));
    }

    #[test]
    fn test_port_error_validation_field() {
        let error = PortError::validation_field("must not be empty", "patient_name");
        match error {
            PortError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("patient_name"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
