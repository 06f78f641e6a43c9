//! Core Kernel - Foundational types and utilities for the prior-authorization system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Human-readable request and patient identifiers
//! - Common error types
//! - Port abstractions for swappable collaborators

pub mod collaborators;
pub mod error;
pub mod identifiers;
pub mod ports;

pub use collaborators::{CollaboratorConfig, CollaboratorSource, ExternalConfig};
pub use error::CoreError;
pub use identifiers::{AuditEventId, IdError, PatientId, RequestId};
pub use ports::{DomainPort, PortError};
