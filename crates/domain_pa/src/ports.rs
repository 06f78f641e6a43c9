//! Repository port for PA requests

use async_trait::async_trait;

use core_kernel::{DomainPort, PatientId, PortError, RequestId};

use crate::patient::{Patient, PatientProfile};
use crate::projection::Role;
use crate::request::{PaRequest, PaStatus};
use crate::submission::PaSubmission;

/// Repository interface for the PA request store
///
/// The bundled implementation is in-memory (`infra_store::MemoryPaStore`);
/// a persistent adapter slots in behind the same trait.
#[async_trait]
pub trait PaRepository: DomainPort {
    /// Returns every request, ordered by id
    async fn list(&self) -> Result<Vec<PaRequest>, PortError>;

    /// Returns the requests visible to a role's dashboard
    async fn list_for(&self, role: Role) -> Result<Vec<PaRequest>, PortError>;

    /// Returns a single request
    async fn get(&self, id: &RequestId) -> Result<PaRequest, PortError>;

    /// Creates a request from a pharmacy submission and runs intake
    /// (`Submitted -> PendingReview`)
    async fn submit(&self, form: PaSubmission, pharmacy: &str) -> Result<PaRequest, PortError>;

    /// Applies a status transition through the domain state machine,
    /// recording the audit event
    async fn transition(
        &self,
        id: &RequestId,
        to: PaStatus,
        actor: &str,
        note: Option<String>,
    ) -> Result<PaRequest, PortError>;

    /// Marks a request's outstanding documentation as supplied
    async fn supply_info(&self, id: &RequestId, actor: &str) -> Result<PaRequest, PortError>;

    /// Returns the patient roster
    async fn patients(&self) -> Result<Vec<Patient>, PortError>;

    /// Returns a patient's profile for the patient view
    async fn patient_profile(&self, id: &PatientId) -> Result<PatientProfile, PortError>;
}
