//! Tests for identifier types

use core_kernel::{AuditEventId, IdError, PatientId, RequestId};

#[test]
fn test_request_id_format() {
    let id = RequestId::from_seq(1);
    assert_eq!(id.as_str(), "PA001");
    assert_eq!(id.to_string(), "PA001");
}

#[test]
fn test_request_id_parse() {
    let id: RequestId = "PA002".parse().unwrap();
    assert_eq!(id, RequestId::from_seq(2));
    assert_eq!(id.seq(), 2);
}

#[test]
fn test_request_id_parse_rejects_garbage() {
    assert!(matches!(
        "PAxyz".parse::<RequestId>(),
        Err(IdError::InvalidSequence(_))
    ));
    assert!(matches!(
        "XX001".parse::<RequestId>(),
        Err(IdError::InvalidPrefix { .. })
    ));
    assert!("PA".parse::<RequestId>().is_err());
}

#[test]
fn test_patient_id_parse() {
    let id: PatientId = "P003".parse().unwrap();
    assert_eq!(id, PatientId::from_seq(3));
}

#[test]
fn test_patient_and_request_codes_do_not_cross_parse() {
    // A patient code lacks the PA prefix, a request code has a non-numeric
    // tail after stripping P.
    assert!("P001".parse::<RequestId>().is_err());
    assert!("PA001".parse::<PatientId>().is_err());
}

#[test]
fn test_request_ids_sort_by_sequence() {
    let mut ids = vec![
        RequestId::from_seq(4),
        RequestId::from_seq(1),
        RequestId::from_seq(3),
    ];
    ids.sort();
    assert_eq!(
        ids.iter().map(|i| i.as_str().to_string()).collect::<Vec<_>>(),
        vec!["PA001", "PA003", "PA004"]
    );
}

#[test]
fn test_request_id_serde_is_transparent() {
    let id = RequestId::from_seq(5);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"PA005\"");
    let back: RequestId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_audit_event_id_uniqueness() {
    let a = AuditEventId::new_v7();
    let b = AuditEventId::new_v7();
    assert_ne!(a.as_uuid(), b.as_uuid());
}
