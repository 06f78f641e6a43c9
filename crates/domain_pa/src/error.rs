//! Prior-authorization domain errors

use crate::request::PaStatus;
use thiserror::Error;

/// Errors that can occur in the PA domain
#[derive(Debug, Error)]
pub enum PaError {
    #[error("PA request not found: {0}")]
    RequestNotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: PaStatus, to: PaStatus },

    #[error("PA request is {status}, which is terminal")]
    TerminalStatus { status: PaStatus },

    #[error("Required fields outstanding: {0:?}")]
    MissingRequiredFields(Vec<String>),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("Timeline order violated: {0}")]
    TimelineOrder(String),
}
