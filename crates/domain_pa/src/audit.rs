//! Audit trail
//!
//! Every submission and status transition emits an event to the audit sink
//! collaborator. The payer dashboard's audit tab reads the trail back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AuditEventId, DomainPort, PortError, RequestId};

use crate::request::PaStatus;

/// What kind of activity an event records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditAction {
    Submitted,
    StatusChanged,
    InfoRequested,
    Signed,
    DecisionMade,
}

/// A single audit-trail entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: AuditEventId,
    pub request: RequestId,
    pub actor: String,
    pub action: AuditAction,
    pub detail: String,
    pub at: DateTime<Utc>,
}

impl AuditEvent {
    /// Records a new submission
    pub fn submitted(request: RequestId, actor: &str) -> Self {
        Self::build(
            request.clone(),
            actor,
            AuditAction::Submitted,
            format!("{request} - Submitted to payer"),
        )
    }

    /// Records a status change
    pub fn status_changed(request: RequestId, actor: &str, from: PaStatus, to: PaStatus) -> Self {
        let action = match to {
            PaStatus::NeedsInfo => AuditAction::InfoRequested,
            PaStatus::Signed => AuditAction::Signed,
            PaStatus::Approved | PaStatus::Denied => AuditAction::DecisionMade,
            _ => AuditAction::StatusChanged,
        };
        Self::build(
            request.clone(),
            actor,
            action,
            format!("{request} - Status moved from {from} to {to}"),
        )
    }

    fn build(request: RequestId, actor: &str, action: AuditAction, detail: String) -> Self {
        Self {
            id: AuditEventId::new_v7(),
            request,
            actor: actor.to_string(),
            action,
            detail,
            at: Utc::now(),
        }
    }
}

/// Port for the audit-log collaborator
#[async_trait]
pub trait AuditSink: DomainPort {
    /// Records an event
    async fn record(&self, event: AuditEvent) -> Result<(), PortError>;

    /// Returns the trail, most recent first
    async fn trail(&self) -> Result<Vec<AuditEvent>, PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_events_are_tagged_decision_made() {
        let event = AuditEvent::status_changed(
            RequestId::from_seq(2),
            "reviewer@bluecross.com",
            PaStatus::ReadyForDecision,
            PaStatus::Approved,
        );
        assert_eq!(event.action, AuditAction::DecisionMade);
        assert!(event.detail.contains("PA002"));
        assert!(event.detail.contains("approved"));
    }

    #[test]
    fn test_info_request_events_are_tagged() {
        let event = AuditEvent::status_changed(
            RequestId::from_seq(1),
            "reviewer@bluecross.com",
            PaStatus::PendingReview,
            PaStatus::NeedsInfo,
        );
        assert_eq!(event.action, AuditAction::InfoRequested);
    }

    #[test]
    fn test_submission_event_detail_names_the_request() {
        let event = AuditEvent::submitted(RequestId::from_seq(7), "City Pharmacy");
        assert_eq!(event.action, AuditAction::Submitted);
        assert!(event.detail.starts_with("PA007"));
    }
}
