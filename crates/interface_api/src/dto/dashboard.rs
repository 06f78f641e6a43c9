//! Dashboard tab content

use serde::Serialize;

use domain_pa::{AuditEvent, Patient, PatientProfile};

use crate::dto::layout::LayoutShell;
use crate::dto::requests::{RequestDetail, RequestRow};

/// A dashboard response: chrome plus exactly one tab's content
#[derive(Debug, Serialize)]
pub struct Dashboard<T: Serialize> {
    pub layout: LayoutShell,
    pub tab: String,
    pub content: T,
}

/// Welcome header at the top of an overview tab
#[derive(Debug, Serialize)]
pub struct Welcome {
    pub heading: String,
    pub message: &'static str,
}

/// A colored summary card
#[derive(Debug, Serialize)]
pub struct SummaryCard {
    pub value: u32,
    pub description: &'static str,
    pub accent: &'static str,
}

/// Content for tabs the prototype never built out
#[derive(Debug, Serialize)]
pub struct Placeholder {
    pub title: String,
    pub message: &'static str,
}

impl Placeholder {
    /// Builds the "under development" payload for a tab id
    pub fn for_tab(tab: &str) -> Self {
        Self {
            title: title_case(tab),
            message: "This section is under development",
        }
    }
}

/// "upload-docs" -> "Upload Docs"
fn title_case(tab: &str) -> String {
    tab.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A field on the new-PA form
#[derive(Debug, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
}

/// A titled group of form fields
#[derive(Debug, Serialize)]
pub struct FormSection {
    pub title: &'static str,
    pub fields: Vec<FormField>,
}

/// The new-PA form, section by section
#[derive(Debug, Serialize)]
pub struct FormSchema {
    pub sections: Vec<FormSection>,
    pub submit_label: &'static str,
}

impl FormSchema {
    /// The new prior-authorization request form
    pub fn new_pa() -> Self {
        fn text(name: &'static str, label: &'static str, required: bool) -> FormField {
            FormField {
                name,
                label,
                kind: "text",
                required,
                options: Vec::new(),
            }
        }

        Self {
            sections: vec![
                FormSection {
                    title: "Patient Information",
                    fields: vec![
                        text("patient_name", "Patient Name", true),
                        FormField {
                            name: "patient_dob",
                            label: "Date of Birth",
                            kind: "date",
                            required: false,
                            options: Vec::new(),
                        },
                        text("insurance_id", "Insurance ID", false),
                        text("patient_phone", "Phone Number", false),
                    ],
                },
                FormSection {
                    title: "Prescription Details",
                    fields: vec![
                        text("drug_name", "Drug Name", true),
                        text("ndc", "NDC Number", false),
                        text("dosage", "Dosage", false),
                        text("frequency", "Frequency", false),
                        text("quantity", "Quantity", false),
                        FormField {
                            name: "payer",
                            label: "Payer",
                            kind: "select",
                            required: false,
                            options: vec!["BlueCross Gold", "Aetna", "Cigna", "Humana"],
                        },
                    ],
                },
                FormSection {
                    title: "Prescriber Information",
                    fields: vec![
                        text("prescriber_name", "Prescriber Name", true),
                        text("prescriber_npi", "NPI Number", false),
                        text("prescriber_phone", "Phone Number", false),
                    ],
                },
            ],
            submit_label: "Submit to Payer",
        }
    }
}

/// Filter vocabularies for the tracking table
#[derive(Debug, Serialize)]
pub struct TrackFilters {
    pub statuses: Vec<&'static str>,
    pub dates: Vec<&'static str>,
}

impl Default for TrackFilters {
    fn default() -> Self {
        Self {
            statuses: vec![
                "all",
                "pending-review",
                "needs-info",
                "ready-for-decision",
                "pending-signature",
                "approved",
                "denied",
            ],
            dates: vec!["today", "week", "month", "all"],
        }
    }
}

/// An analytics metric
#[derive(Debug, Serialize)]
pub struct Metric {
    pub value: String,
    pub label: &'static str,
}

/// One line of the decision panel's auto-validation results
#[derive(Debug, Serialize)]
pub struct ChecklistItem {
    pub label: &'static str,
    pub passed: bool,
}

/// A request awaiting decision, with its validation checklist
#[derive(Debug, Serialize)]
pub struct DecisionItem {
    pub request: RequestDetail,
    pub checklist: Vec<ChecklistItem>,
}

/// Pharmacy dashboard tabs
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum PharmacyTab {
    Overview {
        welcome: Welcome,
        cards: Vec<SummaryCard>,
        recent: Vec<RequestRow>,
    },
    NewRequest {
        form: FormSchema,
    },
    TrackRequests {
        filters: TrackFilters,
        requests: Vec<RequestRow>,
    },
    Patients {
        patients: Vec<Patient>,
    },
    Placeholder(Placeholder),
}

/// Provider dashboard tabs
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ProviderTab {
    Overview {
        welcome: Welcome,
        cards: Vec<SummaryCard>,
        recent: Vec<RequestDetail>,
    },
    PaRequests {
        requests: Vec<RequestDetail>,
    },
    Patients {
        patients: Vec<Patient>,
    },
    Signature {
        pending: Vec<RequestDetail>,
    },
    Placeholder(Placeholder),
}

/// Payer dashboard tabs
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum PayerTab {
    Overview {
        welcome: Welcome,
        cards: Vec<SummaryCard>,
        urgent: Vec<RequestRow>,
        recent: Vec<RequestRow>,
    },
    Incoming {
        requests: Vec<RequestRow>,
    },
    Decisions {
        panel: Vec<DecisionItem>,
    },
    Analytics {
        metrics: Vec<Metric>,
    },
    Audit {
        trail: Vec<AuditEvent>,
    },
    Placeholder(Placeholder),
}

/// The read-only patient view
#[derive(Debug, Serialize)]
pub struct PatientView {
    pub profile: PatientProfile,
    pub requests: Vec<RequestDetail>,
    pub read_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_matches_prototype_rendering() {
        assert_eq!(title_case("upload-docs"), "Upload Docs");
        assert_eq!(title_case("settings"), "Settings");
    }

    #[test]
    fn test_new_pa_form_marks_three_required_fields() {
        let form = FormSchema::new_pa();
        let required: Vec<_> = form
            .sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["patient_name", "drug_name", "prescriber_name"]);
    }

    #[test]
    fn test_payer_select_lists_the_four_payers() {
        let form = FormSchema::new_pa();
        let payer_field = form
            .sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == "payer")
            .unwrap();
        assert_eq!(payer_field.options.len(), 4);
        assert_eq!(payer_field.kind, "select");
    }
}
