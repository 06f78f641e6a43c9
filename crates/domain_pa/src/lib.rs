//! Prior-Authorization Domain
//!
//! This crate implements the PA request lifecycle from pharmacy submission
//! through payer decision, including provider sign-off.
//!
//! # Request Lifecycle
//!
//! ```text
//! Submitted -> Pending Review -> Ready for Decision -> Approved/Denied
//!                  ^    |              |
//!                  |    v              v
//!                  Needs Info     Pending Signature -> Signed -> Ready for Decision
//! ```
//!
//! `Approved` and `Denied` are terminal. Every applied transition appends a
//! timeline step and an audit event.

pub mod audit;
pub mod badge;
pub mod error;
pub mod patient;
pub mod ports;
pub mod projection;
pub mod request;
pub mod submission;
pub mod timeline;

pub use audit::{AuditAction, AuditEvent, AuditSink};
pub use badge::{priority_badge, status_badge, PriorityBadge, StatusBadge};
pub use error::PaError;
pub use patient::{Patient, PatientProfile};
pub use ports::PaRepository;
pub use projection::Role;
pub use request::{DrugInfo, PaRequest, PaStatus, Priority};
pub use submission::PaSubmission;
pub use timeline::{Timeline, TimelineStep};
