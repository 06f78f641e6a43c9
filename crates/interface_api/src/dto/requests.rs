//! Request bodies and shared row/detail projections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_pa::{
    priority_badge, status_badge, DrugInfo, PaRequest, PaStatus, Priority, PriorityBadge,
    StatusBadge, Timeline,
};

/// Login form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub role: String,
}

/// Login result
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub toast: String,
    pub redirect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Sign-out result: a redirect and nothing else
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub redirect: &'static str,
}

/// A request as shown in dashboard tables
#[derive(Debug, Clone, Serialize)]
pub struct RequestRow {
    pub id: String,
    pub patient: String,
    pub drug: String,
    pub pharmacy: String,
    pub prescriber: String,
    pub payer: String,
    pub status: PaStatus,
    pub badge: StatusBadge,
    pub priority: Priority,
    pub priority_badge: PriorityBadge,
    pub submitted: NaiveDate,
}

impl From<&PaRequest> for RequestRow {
    fn from(request: &PaRequest) -> Self {
        Self {
            id: request.id.to_string(),
            patient: request.patient.clone(),
            drug: request.drug.name.clone(),
            pharmacy: request.pharmacy.clone(),
            prescriber: request.prescriber.clone(),
            payer: request.payer.clone(),
            status: request.status,
            badge: status_badge(request.status),
            priority: request.priority,
            priority_badge: priority_badge(request.priority),
            submitted: request.submitted,
        }
    }
}

/// A request with its review detail
#[derive(Debug, Clone, Serialize)]
pub struct RequestDetail {
    #[serde(flatten)]
    pub row: RequestRow,
    pub prescription: DrugInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_decision: Option<NaiveDate>,
    pub required_fields: Vec<String>,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_note: Option<String>,
    pub timeline: Timeline,
}

impl From<&PaRequest> for RequestDetail {
    fn from(request: &PaRequest) -> Self {
        Self {
            row: RequestRow::from(request),
            prescription: request.drug.clone(),
            estimated_decision: request.estimated_decision,
            required_fields: request.required_fields.clone(),
            complete: request.is_complete(),
            notes: request.notes.clone(),
            decision_note: request.decision_note.clone(),
            timeline: request.timeline.clone(),
        }
    }
}

/// Response to a successful new-PA submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub toast: String,
    /// The tab the client should switch to
    pub next_tab: &'static str,
    pub request: RequestRow,
}

/// Payer review outcome
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// `ready` or `needs-info`
    pub outcome: String,
}

/// Payer decision
#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    /// `approved`, `denied`, or `request-info`
    pub decision: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Generic action result: a toast plus the updated request
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub toast: String,
    pub request: RequestDetail,
}
