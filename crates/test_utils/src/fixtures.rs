//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the PA
//! system. These fixtures are designed to be consistent and predictable
//! for unit tests.

use chrono::NaiveDate;

use core_kernel::{PatientId, RequestId};
use domain_pa::{PaSubmission, Patient};

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// The first seeded request
    pub fn request_id() -> RequestId {
        RequestId::from_seq(1)
    }

    /// The urgent seeded request
    pub fn urgent_request_id() -> RequestId {
        RequestId::from_seq(2)
    }

    /// A request id that is never seeded
    pub fn missing_request_id() -> RequestId {
        RequestId::from_seq(999)
    }

    /// The seeded patient with a full profile
    pub fn patient_id() -> PatientId {
        PatientId::from_seq(1)
    }
}

/// Fixture for temporal test data
pub struct DateFixtures;

impl DateFixtures {
    /// Standard submission date
    pub fn submitted() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// Standard review date, the day after submission
    pub fn reviewed() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
    }

    /// Standard decision date
    pub fn decided() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 18).unwrap()
    }

    /// Standard date of birth for a test patient
    pub fn date_of_birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1986, 3, 15).unwrap()
    }
}

/// Fixture for submission forms
pub struct SubmissionFixtures;

impl SubmissionFixtures {
    /// The canonical valid submission
    pub fn lantus_for_jane_doe() -> PaSubmission {
        PaSubmission::minimal("Jane Doe", "Lantus", "Dr. Smith")
    }

    /// A submission missing every required field
    pub fn empty() -> PaSubmission {
        PaSubmission::default()
    }

    /// A submission missing only the drug name
    pub fn missing_drug() -> PaSubmission {
        PaSubmission {
            drug_name: String::new(),
            ..Self::lantus_for_jane_doe()
        }
    }
}

/// Fixture for patient roster entries
pub struct PatientFixtures;

impl PatientFixtures {
    /// A roster entry matching the seeded demo patient
    pub fn jane_doe() -> Patient {
        Patient {
            id: IdFixtures::patient_id(),
            name: "Jane Doe".to_string(),
            dob: DateFixtures::date_of_birth(),
            active_prescriptions: 3,
            pending_pa: 1,
            last_visit: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        }
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard pharmacy display name
    pub fn pharmacy() -> &'static str {
        "City Pharmacy"
    }

    /// Standard payer display name
    pub fn payer() -> &'static str {
        "BlueCross Gold"
    }

    /// Standard reviewer address used as an audit actor
    pub fn reviewer() -> &'static str {
        "reviewer@bluecross.com"
    }

    /// Standard prescriber display name
    pub fn prescriber() -> &'static str {
        "Dr. Sarah Johnson"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_id_fixtures_are_deterministic() {
        assert_eq!(IdFixtures::request_id(), IdFixtures::request_id());
        assert_eq!(IdFixtures::request_id().as_str(), "PA001");
    }

    #[test]
    fn test_date_fixtures_ordering() {
        assert!(DateFixtures::submitted() < DateFixtures::reviewed());
        assert!(DateFixtures::reviewed() < DateFixtures::decided());
    }

    #[test]
    fn test_submission_fixtures_validity() {
        assert!(SubmissionFixtures::lantus_for_jane_doe().validate().is_ok());
        assert!(SubmissionFixtures::empty().validate().is_err());
        assert!(SubmissionFixtures::missing_drug().validate().is_err());
    }
}
