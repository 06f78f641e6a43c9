//! PA request aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{PatientId, RequestId};

use crate::error::PaError;
use crate::submission::PaSubmission;
use crate::timeline::Timeline;

/// Canonical PA request status
///
/// The role dashboards historically used overlapping vocabularies
/// (`pending` vs `pending-review`, `needs-review` vs `needs-info`); those
/// collapse onto this set, see [`PaStatus::from_legacy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaStatus {
    /// Received from the pharmacy, not yet in the review queue
    Submitted,
    /// In the payer's review queue
    PendingReview,
    /// Waiting on the pharmacy to supply missing fields
    NeedsInfo,
    /// Review complete, awaiting the payer's decision
    ReadyForDecision,
    /// Routed to the prescriber for sign-off
    PendingSignature,
    /// Prescriber signed, returning to the decision queue
    Signed,
    /// Approved by the payer
    Approved,
    /// Denied by the payer
    Denied,
}

impl PaStatus {
    /// All statuses, in lifecycle order
    pub fn all() -> [PaStatus; 8] {
        [
            PaStatus::Submitted,
            PaStatus::PendingReview,
            PaStatus::NeedsInfo,
            PaStatus::ReadyForDecision,
            PaStatus::PendingSignature,
            PaStatus::Signed,
            PaStatus::Approved,
            PaStatus::Denied,
        ]
    }

    /// The kebab-case wire form (`pending-review`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            PaStatus::Submitted => "submitted",
            PaStatus::PendingReview => "pending-review",
            PaStatus::NeedsInfo => "needs-info",
            PaStatus::ReadyForDecision => "ready-for-decision",
            PaStatus::PendingSignature => "pending-signature",
            PaStatus::Signed => "signed",
            PaStatus::Approved => "approved",
            PaStatus::Denied => "denied",
        }
    }

    /// Parses canonical wire forms plus the legacy per-role aliases
    /// (`pending`, `needs-review`)
    pub fn from_legacy(s: &str) -> Option<PaStatus> {
        match s {
            "submitted" => Some(PaStatus::Submitted),
            "pending" | "pending-review" => Some(PaStatus::PendingReview),
            "needs-info" | "needs-review" => Some(PaStatus::NeedsInfo),
            "ready-for-decision" => Some(PaStatus::ReadyForDecision),
            "pending-signature" => Some(PaStatus::PendingSignature),
            "signed" => Some(PaStatus::Signed),
            "approved" => Some(PaStatus::Approved),
            "denied" => Some(PaStatus::Denied),
            _ => None,
        }
    }

    /// Returns true for terminal statuses
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaStatus::Approved | PaStatus::Denied)
    }

    /// The timeline step name recorded when a request enters this status
    pub fn step_name(&self) -> &'static str {
        match self {
            PaStatus::Submitted => "Submitted",
            PaStatus::PendingReview => "Under Review",
            PaStatus::NeedsInfo => "Info Requested",
            PaStatus::ReadyForDecision => "Review Complete",
            PaStatus::PendingSignature => "Provider Review",
            PaStatus::Signed => "Provider Signed",
            PaStatus::Approved | PaStatus::Denied => "Payer Decision",
        }
    }
}

impl fmt::Display for PaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request priority, orthogonal to status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Standard,
    Urgent,
}

impl Priority {
    pub fn is_urgent(&self) -> bool {
        matches!(self, Priority::Urgent)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Standard => "standard",
            Priority::Urgent => "urgent",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Standard
    }
}

/// Prescription details carried on a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugInfo {
    /// Drug name
    pub name: String,
    /// National Drug Code
    pub ndc: Option<String>,
    /// Dosage (e.g. "100 units/mL")
    pub dosage: Option<String>,
    /// Frequency (e.g. "Once daily")
    pub frequency: Option<String>,
    /// Quantity (e.g. "90 day supply")
    pub quantity: Option<String>,
}

impl DrugInfo {
    /// Creates drug info with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ndc: None,
            dosage: None,
            frequency: None,
            quantity: None,
        }
    }
}

/// A prior-authorization request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaRequest {
    /// Unique identifier (PA001, ...)
    pub id: RequestId,
    /// Patient display name
    pub patient: String,
    /// Patient roster code, when the patient is on file
    pub patient_id: Option<PatientId>,
    /// Prescription details
    pub drug: DrugInfo,
    /// Submitting pharmacy
    pub pharmacy: String,
    /// Prescriber display name
    pub prescriber: String,
    /// Payer reviewing the request
    pub payer: String,
    /// Current status
    pub status: PaStatus,
    /// Priority flag
    pub priority: Priority,
    /// Submission date
    pub submitted: NaiveDate,
    /// Estimated decision date
    pub estimated_decision: Option<NaiveDate>,
    /// Documentation items still outstanding
    pub required_fields: Vec<String>,
    /// Clinical notes shown on the provider portal
    pub notes: Option<String>,
    /// Payer rationale captured at decision time
    pub decision_note: Option<String>,
    /// Progress timeline
    pub timeline: Timeline,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl PaRequest {
    /// Creates a new request from a pharmacy submission
    ///
    /// The request starts at `Submitted` with the submission recorded on
    /// its timeline; intake advances it to `PendingReview` separately. The
    /// submitting pharmacy comes from the session, not the form.
    pub fn submit(id: RequestId, form: &PaSubmission, pharmacy: impl Into<String>) -> Self {
        let now = Utc::now();
        let today = now.date_naive();

        let mut timeline = Timeline::new();
        timeline.record_step(PaStatus::Submitted.step_name(), today);

        Self {
            id,
            patient: form.patient_name.clone(),
            patient_id: None,
            drug: DrugInfo {
                name: form.drug_name.clone(),
                ndc: form.ndc.clone(),
                dosage: form.dosage.clone(),
                frequency: form.frequency.clone(),
                quantity: form.quantity.clone(),
            },
            pharmacy: pharmacy.into(),
            prescriber: form.prescriber_name.clone(),
            payer: form.payer.clone().unwrap_or_default(),
            status: PaStatus::Submitted,
            priority: form.priority.unwrap_or_default(),
            submitted: today,
            estimated_decision: None,
            required_fields: Vec::new(),
            notes: None,
            decision_note: None,
            timeline,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a status transition
    ///
    /// Rejects transitions out of a terminal status, pairs outside the
    /// lifecycle, and review completion while documentation is outstanding.
    /// On success the matching timeline step is recorded.
    pub fn transition(&mut self, to: PaStatus) -> Result<(), PaError> {
        if self.status.is_terminal() {
            return Err(PaError::TerminalStatus { status: self.status });
        }
        if !self.can_transition_to(to) {
            return Err(PaError::InvalidStatusTransition {
                from: self.status,
                to,
            });
        }
        if to == PaStatus::ReadyForDecision
            && self.status == PaStatus::PendingReview
            && !self.required_fields.is_empty()
        {
            return Err(PaError::MissingRequiredFields(self.required_fields.clone()));
        }

        let now = Utc::now();
        self.status = to;
        self.timeline.record_step(to.step_name(), now.date_naive());
        self.updated_at = now;
        Ok(())
    }

    /// Marks outstanding documentation as supplied
    pub fn supply_required_fields(&mut self) {
        self.required_fields.clear();
        self.updated_at = Utc::now();
    }

    /// Returns true when no documentation is outstanding
    pub fn is_complete(&self) -> bool {
        self.required_fields.is_empty()
    }

    /// Checks if transition is valid
    fn can_transition_to(&self, target: PaStatus) -> bool {
        use PaStatus::*;
        matches!(
            (self.status, target),
            (Submitted, PendingReview)
                | (PendingReview, ReadyForDecision)
                | (PendingReview, NeedsInfo)
                | (NeedsInfo, PendingReview)
                | (ReadyForDecision, Approved)
                | (ReadyForDecision, Denied)
                | (ReadyForDecision, PendingSignature)
                | (PendingSignature, Signed)
                | (Signed, ReadyForDecision)
        )
    }
}
