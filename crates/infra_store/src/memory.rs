//! In-memory PA store
//!
//! Implements `PaRepository` and `AuditSink` over `tokio::sync::RwLock`
//! collections. Status changes go through the domain state machine, never
//! around it, and each applied change records an audit event.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use validator::Validate;

use core_kernel::{DomainPort, PatientId, PortError, RequestId};
use domain_pa::{
    AuditEvent, AuditSink, PaRepository, PaRequest, PaStatus, PaSubmission, Patient,
    PatientProfile, Role,
};

use crate::error::StoreError;
use crate::seed;

struct StoreInner {
    requests: BTreeMap<RequestId, PaRequest>,
    patients: Vec<Patient>,
    profiles: HashMap<PatientId, PatientProfile>,
    audit: Vec<AuditEvent>,
    next_seq: u32,
}

/// In-memory request store and audit sink
pub struct MemoryPaStore {
    inner: RwLock<StoreInner>,
}

impl MemoryPaStore {
    /// Creates an empty store
    pub fn empty() -> Self {
        Self::with_data(Vec::new(), Vec::new(), HashMap::new())
    }

    /// Creates a store loaded with the bundled seed data
    pub fn seeded() -> Self {
        Self::with_data(seed::requests(), seed::patients(), seed::patient_profiles())
    }

    /// Creates a store from explicit data sets
    pub fn with_data(
        requests: Vec<PaRequest>,
        patients: Vec<Patient>,
        profiles: HashMap<PatientId, PatientProfile>,
    ) -> Self {
        let next_seq = requests.iter().map(|r| r.id.seq()).max().unwrap_or(0) + 1;
        let requests = requests.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self {
            inner: RwLock::new(StoreInner {
                requests,
                patients,
                profiles,
                audit: Vec::new(),
                next_seq,
            }),
        }
    }
}

impl DomainPort for MemoryPaStore {}

#[async_trait]
impl PaRepository for MemoryPaStore {
    async fn list(&self) -> Result<Vec<PaRequest>, PortError> {
        let inner = self.inner.read().await;
        Ok(inner.requests.values().cloned().collect())
    }

    async fn list_for(&self, role: Role) -> Result<Vec<PaRequest>, PortError> {
        let inner = self.inner.read().await;
        Ok(inner
            .requests
            .values()
            .filter(|r| role.sees(r.status))
            .cloned()
            .collect())
    }

    async fn get(&self, id: &RequestId) -> Result<PaRequest, PortError> {
        let inner = self.inner.read().await;
        inner
            .requests
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("PaRequest", id).into())
    }

    async fn submit(&self, form: PaSubmission, pharmacy: &str) -> Result<PaRequest, PortError> {
        form.validate().map_err(|errors| {
            let fields: Vec<_> = errors.field_errors().keys().map(|k| k.to_string()).collect();
            StoreError::Submission(format!("required fields missing: {}", fields.join(", ")))
        })?;

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;

        let mut request = PaRequest::submit(RequestId::from_seq(seq), &form, pharmacy);
        if let Some(patient) = inner.patients.iter().find(|p| p.name == request.patient) {
            request.patient_id = Some(patient.id.clone());
        }
        // Intake: submitted requests land straight in the review queue.
        request.transition(PaStatus::PendingReview).map_err(StoreError::Domain)?;

        tracing::info!(id = %request.id, patient = %request.patient, "PA request submitted");

        inner.audit.push(AuditEvent::submitted(request.id.clone(), pharmacy));
        inner.requests.insert(request.id.clone(), request.clone());
        Ok(request)
    }

    async fn transition(
        &self,
        id: &RequestId,
        to: PaStatus,
        actor: &str,
        note: Option<String>,
    ) -> Result<PaRequest, PortError> {
        let mut inner = self.inner.write().await;
        let request = inner
            .requests
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("PaRequest", id))?;

        let from = request.status;
        request.transition(to).map_err(StoreError::Domain)?;
        if to.is_terminal() {
            request.decision_note = note;
        }
        let updated = request.clone();

        tracing::info!(id = %id, %from, %to, actor, "PA request transitioned");

        inner.audit.push(AuditEvent::status_changed(id.clone(), actor, from, to));
        Ok(updated)
    }

    async fn supply_info(&self, id: &RequestId, actor: &str) -> Result<PaRequest, PortError> {
        let mut inner = self.inner.write().await;
        let request = inner
            .requests
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("PaRequest", id))?;

        let from = request.status;
        let mut updated = request.clone();
        updated.supply_required_fields();
        updated
            .transition(PaStatus::PendingReview)
            .map_err(StoreError::Domain)?;
        *request = updated.clone();

        inner
            .audit
            .push(AuditEvent::status_changed(id.clone(), actor, from, PaStatus::PendingReview));
        Ok(updated)
    }

    async fn patients(&self) -> Result<Vec<Patient>, PortError> {
        let inner = self.inner.read().await;
        Ok(inner.patients.clone())
    }

    async fn patient_profile(&self, id: &PatientId) -> Result<PatientProfile, PortError> {
        let inner = self.inner.read().await;
        inner
            .profiles
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Patient", id).into())
    }
}

#[async_trait]
impl AuditSink for MemoryPaStore {
    async fn record(&self, event: AuditEvent) -> Result<(), PortError> {
        let mut inner = self.inner.write().await;
        inner.audit.push(event);
        Ok(())
    }

    async fn trail(&self) -> Result<Vec<AuditEvent>, PortError> {
        let inner = self.inner.read().await;
        let mut events = inner.audit.clone();
        events.reverse();
        Ok(events)
    }
}
