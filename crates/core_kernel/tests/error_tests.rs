//! Tests for core error types

use core_kernel::{CoreError, PortError};

#[test]
fn test_core_error_constructors() {
    let validation = CoreError::validation("patient name required");
    assert!(validation.to_string().contains("patient name required"));

    let state = CoreError::invalid_state("approved is terminal");
    assert!(state.to_string().contains("approved is terminal"));

    let not_found = CoreError::not_found("PA999");
    assert!(not_found.to_string().contains("PA999"));
}

#[test]
fn test_core_error_from_id_error() {
    let id_err = "XX001".parse::<core_kernel::RequestId>().unwrap_err();
    let core: CoreError = id_err.into();
    assert!(matches!(core, CoreError::Identifier(_)));
}

#[test]
fn test_port_error_display_includes_entity() {
    let err = PortError::not_found("Patient", "P009");
    assert_eq!(err.to_string(), "Not found: Patient with id P009");
}

#[test]
fn test_port_error_conflict() {
    let err = PortError::conflict("request PA001 already exists");
    assert!(err.to_string().starts_with("Conflict:"));
    assert!(!err.is_not_found());
}
