//! New-PA submission form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::request::Priority;

/// A pharmacy's new-PA form
///
/// Patient name, drug name, and prescriber name are required; everything
/// else is optional supporting detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PaSubmission {
    // Patient information
    #[validate(length(min = 1, message = "patient name is required"))]
    pub patient_name: String,
    pub patient_dob: Option<NaiveDate>,
    pub insurance_id: Option<String>,
    pub patient_phone: Option<String>,

    // Prescription details
    #[validate(length(min = 1, message = "drug name is required"))]
    pub drug_name: String,
    pub ndc: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub quantity: Option<String>,
    pub payer: Option<String>,
    pub priority: Option<Priority>,

    // Prescriber information
    #[validate(length(min = 1, message = "prescriber name is required"))]
    pub prescriber_name: String,
    pub prescriber_npi: Option<String>,
    pub prescriber_phone: Option<String>,
}

impl PaSubmission {
    /// Creates a submission with just the required fields
    pub fn minimal(
        patient_name: impl Into<String>,
        drug_name: impl Into<String>,
        prescriber_name: impl Into<String>,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            drug_name: drug_name.into(),
            prescriber_name: prescriber_name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_submission_validates() {
        let form = PaSubmission::minimal("Jane Doe", "Lantus", "Dr. Smith");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields_fail_validation() {
        let form = PaSubmission {
            patient_name: "Jane Doe".to_string(),
            drug_name: String::new(),
            prescriber_name: "Dr. Smith".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("drug_name"));
    }

    #[test]
    fn test_empty_form_reports_all_three_required_fields() {
        let errors = PaSubmission::default().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("patient_name"));
        assert!(fields.contains_key("drug_name"));
        assert!(fields.contains_key("prescriber_name"));
    }
}
