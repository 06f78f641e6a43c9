//! Seed data sets
//!
//! All data in this module is hardcoded and fictional. It reproduces the
//! request and patient rosters the dashboards launched with, reconciled
//! into one canonical store: each request has a single status, and the
//! role dashboards project over it.

use chrono::NaiveDate;
use std::collections::HashMap;

use core_kernel::{PatientId, RequestId};
use domain_pa::{
    DrugInfo, PaRequest, PaStatus, Patient, PatientProfile, Priority, Timeline,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

#[allow(clippy::too_many_arguments)]
fn request(
    seq: u32,
    patient: &str,
    patient_seq: Option<u32>,
    drug: DrugInfo,
    pharmacy: &str,
    prescriber: &str,
    payer: &str,
    status: PaStatus,
    priority: Priority,
    submitted: NaiveDate,
    timeline: Timeline,
) -> PaRequest {
    let now = chrono::Utc::now();
    PaRequest {
        id: RequestId::from_seq(seq),
        patient: patient.to_string(),
        patient_id: patient_seq.map(PatientId::from_seq),
        drug,
        pharmacy: pharmacy.to_string(),
        prescriber: prescriber.to_string(),
        payer: payer.to_string(),
        status,
        priority,
        submitted,
        estimated_decision: None,
        required_fields: Vec::new(),
        notes: None,
        decision_note: None,
        timeline,
        created_at: now,
        updated_at: now,
    }
}

/// The canonical request set the service starts with
pub fn requests() -> Vec<PaRequest> {
    let mut out = Vec::new();

    // PA001 - in the payer's review queue, documentation outstanding
    let mut timeline = Timeline::new();
    timeline.record_step("Submitted", date(2024, 1, 15));
    timeline.record_step("Under Review", date(2024, 1, 16));
    timeline.plan_step("Provider Review", date(2024, 1, 17));
    timeline.plan_step("Payer Decision", date(2024, 1, 18));
    let mut pa001 = request(
        1,
        "Jane Doe",
        Some(1),
        DrugInfo {
            name: "Lantus Solostar".to_string(),
            ndc: Some("00088-2220-33".to_string()),
            dosage: Some("100 units/mL".to_string()),
            frequency: Some("Once daily".to_string()),
            quantity: Some("90 day supply".to_string()),
        },
        "City Pharmacy",
        "Dr. Sarah Johnson",
        "BlueCross Gold",
        PaStatus::PendingReview,
        Priority::Standard,
        date(2024, 1, 15),
        timeline,
    );
    pa001.required_fields = vec!["lab-results".to_string(), "diagnosis".to_string()];
    pa001.estimated_decision = Some(date(2024, 1, 18));
    pa001.notes = Some("Diabetes management, previous treatments failed".to_string());
    out.push(pa001);

    // PA002 - review complete, awaiting decision, urgent
    let mut timeline = Timeline::new();
    timeline.record_step("Submitted", date(2024, 1, 14));
    timeline.record_step("Under Review", date(2024, 1, 15));
    timeline.record_step("Review Complete", date(2024, 1, 16));
    timeline.plan_step("Payer Decision", date(2024, 1, 17));
    let mut pa002 = request(
        2,
        "John Johnson",
        Some(2),
        DrugInfo::named("Humira"),
        "HealthMart Pharmacy",
        "Dr. Michael Brown",
        "Aetna",
        PaStatus::ReadyForDecision,
        Priority::Urgent,
        date(2024, 1, 14),
        timeline,
    );
    pa002.estimated_decision = Some(date(2024, 1, 17));
    pa002.notes = Some("Rheumatoid arthritis, methotrexate intolerance".to_string());
    out.push(pa002);

    // PA003 - approved, terminal
    let mut timeline = Timeline::new();
    timeline.record_step("Submitted", date(2024, 1, 10));
    timeline.record_step("Under Review", date(2024, 1, 11));
    timeline.record_step("Provider Review", date(2024, 1, 12));
    timeline.record_step("Payer Decision", date(2024, 1, 13));
    let mut pa003 = request(
        3,
        "Mary Wilson",
        Some(3),
        DrugInfo::named("Ozempic"),
        "CVS Pharmacy",
        "Dr. Lisa Davis",
        "Cigna",
        PaStatus::Approved,
        Priority::Standard,
        date(2024, 1, 10),
        timeline,
    );
    pa003.notes = Some("Type 2 diabetes management".to_string());
    out.push(pa003);

    // PA004 - waiting on the pharmacy for chart notes
    let mut timeline = Timeline::new();
    timeline.record_step("Submitted", date(2024, 1, 12));
    timeline.record_step("Under Review", date(2024, 1, 13));
    timeline.record_step("Info Requested", date(2024, 1, 14));
    timeline.plan_step("Payer Decision", date(2024, 1, 18));
    let mut pa004 = request(
        4,
        "Robert Taylor",
        None,
        DrugInfo::named("Xarelto"),
        "Walgreens",
        "Dr. James Miller",
        "BlueCross Gold",
        PaStatus::NeedsInfo,
        Priority::Standard,
        date(2024, 1, 12),
        timeline,
    );
    pa004.required_fields = vec!["chart-notes".to_string()];
    pa004.notes = Some("Atrial fibrillation, stroke prevention".to_string());
    out.push(pa004);

    // PA005 - routed to the prescriber for sign-off
    let mut timeline = Timeline::new();
    timeline.record_step("Submitted", date(2024, 1, 11));
    timeline.record_step("Under Review", date(2024, 1, 12));
    timeline.record_step("Review Complete", date(2024, 1, 13));
    timeline.record_step("Provider Review", date(2024, 1, 14));
    timeline.plan_step("Payer Decision", date(2024, 1, 18));
    let mut pa005 = request(
        5,
        "Alice Chen",
        None,
        DrugInfo::named("Trulicity"),
        "City Pharmacy",
        "Dr. Sarah Johnson",
        "Humana",
        PaStatus::PendingSignature,
        Priority::Standard,
        date(2024, 1, 11),
        timeline,
    );
    pa005.notes = Some("Type 2 diabetes, metformin insufficient".to_string());
    out.push(pa005);

    // PA006 - denied, terminal
    let mut timeline = Timeline::new();
    timeline.record_step("Submitted", date(2024, 1, 9));
    timeline.record_step("Under Review", date(2024, 1, 10));
    timeline.record_step("Review Complete", date(2024, 1, 11));
    timeline.record_step("Payer Decision", date(2024, 1, 12));
    let mut pa006 = request(
        6,
        "David Park",
        None,
        DrugInfo::named("Eliquis"),
        "HealthMart Pharmacy",
        "Dr. Michael Brown",
        "Aetna",
        PaStatus::Denied,
        Priority::Standard,
        date(2024, 1, 9),
        timeline,
    );
    pa006.decision_note = Some("Not covered under current formulary".to_string());
    pa006.notes = Some("DVT prophylaxis following hip replacement".to_string());
    out.push(pa006);

    out
}

/// The patient roster
pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: PatientId::from_seq(1),
            name: "Jane Doe".to_string(),
            dob: date(1986, 3, 15),
            active_prescriptions: 3,
            pending_pa: 1,
            last_visit: date(2024, 1, 10),
        },
        Patient {
            id: PatientId::from_seq(2),
            name: "John Johnson".to_string(),
            dob: date(1975, 7, 22),
            active_prescriptions: 5,
            pending_pa: 1,
            last_visit: date(2024, 1, 8),
        },
        Patient {
            id: PatientId::from_seq(3),
            name: "Mary Wilson".to_string(),
            dob: date(1968, 11, 30),
            active_prescriptions: 2,
            pending_pa: 0,
            last_visit: date(2024, 1, 5),
        },
    ]
}

/// Contact profiles for the patient view
pub fn patient_profiles() -> HashMap<PatientId, PatientProfile> {
    let mut profiles = HashMap::new();
    let roster = patients();

    let contacts = [
        ("BC123456789", "(555) 123-4567", "jane.doe@email.com"),
        ("AE987654321", "(555) 234-5678", "john.johnson@email.com"),
        ("CG456789123", "(555) 345-6789", "mary.wilson@email.com"),
    ];

    for (patient, (member_id, phone, email)) in roster.into_iter().zip(contacts) {
        profiles.insert(
            patient.id.clone(),
            PatientProfile {
                patient,
                member_id: member_id.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
            },
        );
    }

    profiles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<_> = requests().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["PA001", "PA002", "PA003", "PA004", "PA005", "PA006"]);
    }

    #[test]
    fn test_seed_covers_every_active_queue() {
        let statuses: Vec<_> = requests().iter().map(|r| r.status).collect();
        for expected in [
            PaStatus::PendingReview,
            PaStatus::ReadyForDecision,
            PaStatus::NeedsInfo,
            PaStatus::PendingSignature,
            PaStatus::Approved,
            PaStatus::Denied,
        ] {
            assert!(statuses.contains(&expected), "seed missing {expected}");
        }
    }

    #[test]
    fn test_seed_timelines_are_monotonic() {
        for request in requests() {
            assert!(request.timeline.is_monotonic(), "{} timeline out of order", request.id);
        }
    }

    #[test]
    fn test_exactly_one_urgent_seed() {
        let urgent: Vec<_> = requests()
            .into_iter()
            .filter(|r| r.priority.is_urgent())
            .collect();
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].id.as_str(), "PA002");
    }

    #[test]
    fn test_every_patient_has_a_profile() {
        let profiles = patient_profiles();
        for patient in patients() {
            assert!(profiles.contains_key(&patient.id));
        }
    }
}
