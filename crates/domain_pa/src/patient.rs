//! Patient roster entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::PatientId;

/// A patient as shown on the pharmacy and provider rosters
///
/// Patients relate to PA requests by display name only; the source data
/// carries no referential key between the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub dob: NaiveDate,
    pub active_prescriptions: u32,
    pub pending_pa: u32,
    pub last_visit: NaiveDate,
}

/// Extended contact details for the patient view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub patient: Patient,
    pub member_id: String,
    pub phone: String,
    pub email: String,
}
