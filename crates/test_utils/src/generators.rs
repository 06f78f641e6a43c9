//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;

use domain_pa::{PaStatus, PaSubmission, Priority, Role};

/// Strategy for generating any status
pub fn status_strategy() -> impl Strategy<Value = PaStatus> {
    prop::sample::select(PaStatus::all().to_vec())
}

/// Strategy for generating non-terminal statuses
pub fn active_status_strategy() -> impl Strategy<Value = PaStatus> {
    prop::sample::select(
        PaStatus::all()
            .into_iter()
            .filter(|s| !s.is_terminal())
            .collect::<Vec<_>>(),
    )
}

/// Strategy for generating a priority flag
pub fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::Standard), Just(Priority::Urgent)]
}

/// Strategy for generating a dashboard role
pub fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::all().to_vec())
}

/// Strategy for generating short human names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}"
}

/// Strategy for generating valid submissions
pub fn submission_strategy() -> impl Strategy<Value = PaSubmission> {
    (name_strategy(), "[A-Z][a-z]{3,10}", name_strategy()).prop_map(
        |(patient, drug, prescriber)| {
            PaSubmission::minimal(patient, drug, format!("Dr. {prescriber}"))
        },
    )
}

/// Strategy for generating a random walk of attempted transitions
pub fn transition_walk_strategy(max_len: usize) -> impl Strategy<Value = Vec<PaStatus>> {
    prop::collection::vec(status_strategy(), 0..max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_active_statuses_are_never_terminal(status in active_status_strategy()) {
            prop_assert!(!status.is_terminal());
        }

        #[test]
        fn prop_generated_submissions_validate(form in submission_strategy()) {
            use validator::Validate;
            prop_assert!(form.validate().is_ok());
        }
    }
}
