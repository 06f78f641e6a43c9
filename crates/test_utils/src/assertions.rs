//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_pa::{status_badge, PaRequest, PaStatus, Timeline};

/// Asserts that a request is at the expected status
///
/// # Panics
///
/// Panics with the request id and both statuses if they differ
pub fn assert_status(request: &PaRequest, expected: PaStatus) {
    assert_eq!(
        request.status, expected,
        "{} expected status {}, got {}",
        request.id, expected, request.status
    );
}

/// Asserts that a timeline's completed flags form a prefix
///
/// # Panics
///
/// Panics naming the first completed step that follows an incomplete one
pub fn assert_timeline_monotonic(timeline: &Timeline) {
    let mut first_incomplete: Option<&str> = None;
    for step in timeline.steps() {
        match (step.completed, first_incomplete) {
            (true, Some(earlier)) => panic!(
                "completed step {:?} follows incomplete step {:?}",
                step.name, earlier
            ),
            (false, None) => first_incomplete = Some(&step.name),
            _ => {}
        }
    }
}

/// Asserts that two requests would render the same badge
///
/// Guards the cross-dashboard consistency rule: same status, same badge.
pub fn assert_badges_match(a: &PaRequest, b: &PaRequest) {
    assert_eq!(a.status, b.status, "{} and {} differ in status", a.id, b.id);
    assert_eq!(
        status_badge(a.status),
        status_badge(b.status),
        "{} and {} render different badges for the same status",
        a.id,
        b.id
    );
}

/// Asserts that a request is terminal and refuses further transitions
pub fn assert_terminal(request: &PaRequest) {
    assert!(
        request.status.is_terminal(),
        "{} expected a terminal status, got {}",
        request.id,
        request.status
    );
    let mut probe = request.clone();
    for target in PaStatus::all() {
        assert!(
            probe.transition(target).is_err(),
            "{} accepted a transition out of terminal {}",
            request.id,
            request.status
        );
    }
}
