//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::{NaiveDate, Utc};

use core_kernel::{PatientId, RequestId};
use domain_pa::{DrugInfo, PaRequest, PaStatus, Priority, Timeline};

use crate::fixtures::DateFixtures;

/// Builder for constructing test PA requests
///
/// The built request carries whatever status the builder was given without
/// walking the lifecycle; use it to stage a request at a specific point.
pub struct PaRequestBuilder {
    seq: u32,
    patient: String,
    patient_seq: Option<u32>,
    drug: String,
    pharmacy: String,
    prescriber: String,
    payer: String,
    status: PaStatus,
    priority: Priority,
    submitted: NaiveDate,
    required_fields: Vec<String>,
    notes: Option<String>,
    timeline: Timeline,
}

impl Default for PaRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        let mut timeline = Timeline::new();
        timeline.record_step("Submitted", DateFixtures::submitted());

        Self {
            seq: 1,
            patient: "Jane Doe".to_string(),
            patient_seq: None,
            drug: "Lantus Solostar".to_string(),
            pharmacy: "City Pharmacy".to_string(),
            prescriber: "Dr. Sarah Johnson".to_string(),
            payer: "BlueCross Gold".to_string(),
            status: PaStatus::PendingReview,
            priority: Priority::Standard,
            submitted: DateFixtures::submitted(),
            required_fields: Vec::new(),
            notes: None,
            timeline,
        }
    }

    /// Sets the request sequence (1 -> PA001)
    pub fn with_seq(mut self, seq: u32) -> Self {
        self.seq = seq;
        self
    }

    /// Sets the patient display name
    pub fn with_patient(mut self, name: impl Into<String>) -> Self {
        self.patient = name.into();
        self
    }

    /// Links the request to a roster patient
    pub fn with_patient_seq(mut self, seq: u32) -> Self {
        self.patient_seq = Some(seq);
        self
    }

    /// Sets the drug name
    pub fn with_drug(mut self, name: impl Into<String>) -> Self {
        self.drug = name.into();
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: PaStatus) -> Self {
        self.status = status;
        self
    }

    /// Flags the request urgent
    pub fn urgent(mut self) -> Self {
        self.priority = Priority::Urgent;
        self
    }

    /// Sets outstanding documentation items
    pub fn with_required_fields(mut self, fields: &[&str]) -> Self {
        self.required_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Sets the clinical notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the submission date
    pub fn with_submitted(mut self, date: NaiveDate) -> Self {
        self.submitted = date;
        self
    }

    /// Replaces the timeline
    pub fn with_timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }

    /// Builds the request
    pub fn build(self) -> PaRequest {
        let now = Utc::now();
        PaRequest {
            id: RequestId::from_seq(self.seq),
            patient: self.patient,
            patient_id: self.patient_seq.map(PatientId::from_seq),
            drug: DrugInfo::named(self.drug),
            pharmacy: self.pharmacy,
            prescriber: self.prescriber,
            payer: self.payer,
            status: self.status,
            priority: self.priority,
            submitted: self.submitted,
            estimated_decision: None,
            required_fields: self.required_fields,
            notes: self.notes,
            decision_note: None,
            timeline: self.timeline,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = PaRequestBuilder::new().build();
        assert_eq!(request.id.as_str(), "PA001");
        assert_eq!(request.status, PaStatus::PendingReview);
        assert_eq!(request.priority, Priority::Standard);
        assert!(request.is_complete());
    }

    #[test]
    fn test_builder_overrides() {
        let request = PaRequestBuilder::new()
            .with_seq(42)
            .with_status(PaStatus::ReadyForDecision)
            .urgent()
            .with_required_fields(&["lab-results"])
            .build();
        assert_eq!(request.id.as_str(), "PA042");
        assert_eq!(request.status, PaStatus::ReadyForDecision);
        assert!(request.priority.is_urgent());
        assert!(!request.is_complete());
    }
}
