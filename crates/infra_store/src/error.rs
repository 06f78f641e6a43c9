//! Store error types

use core_kernel::PortError;
use domain_pa::PaError;
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Domain(#[from] PaError),

    #[error("Invalid submission: {0}")]
    Submission(String),
}

impl StoreError {
    /// Creates a NotFound error
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for PortError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => PortError::not_found(entity, id),
            StoreError::Domain(PaError::RequestNotFound(id)) => {
                PortError::not_found("PaRequest", id)
            }
            StoreError::Domain(PaError::MissingRequiredFields(fields)) => {
                PortError::validation(format!("required fields outstanding: {}", fields.join(", ")))
            }
            StoreError::Domain(domain) => PortError::conflict(domain.to_string()),
            StoreError::Submission(message) => PortError::validation(message),
        }
    }
}
