//! Strongly-typed identifiers for domain entities
//!
//! Requests and patients carry the short prefixed codes the rest of the
//! system displays verbatim (`PA001`, `P002`), so those identifiers wrap a
//! validated code string rather than a UUID. Audit events are internal and
//! use time-ordered UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors from parsing an identifier code
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Identifier must start with prefix {expected}: {value}")]
    InvalidPrefix { expected: &'static str, value: String },

    #[error("Identifier sequence must be numeric: {0}")]
    InvalidSequence(String),
}

macro_rules! define_code {
    ($name:ident, $prefix:literal, $width:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Builds the identifier from its numeric sequence (1 -> zero-padded code)
            pub fn from_seq(seq: u32) -> Self {
                Self(format!("{}{:0w$}", $prefix, seq, w = $width))
            }

            /// Returns the code as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the numeric sequence portion of the code
            pub fn seq(&self) -> u32 {
                // The constructor and FromStr guarantee a numeric suffix.
                self.0[$prefix.len()..].parse().unwrap_or(0)
            }

            /// Returns the identifier prefix
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let seq = s.strip_prefix($prefix).ok_or_else(|| IdError::InvalidPrefix {
                    expected: $prefix,
                    value: s.to_string(),
                })?;
                if seq.is_empty() || !seq.chars().all(|c| c.is_ascii_digit()) {
                    return Err(IdError::InvalidSequence(s.to_string()));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Prior-authorization request codes (PA001, PA002, ...)
define_code!(RequestId, "PA", 3);

// Patient roster codes (P001, P002, ...)
define_code!(PatientId, "P", 3);

// Internal identifiers
define_id!(AuditEventId, "AUD");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_from_seq_pads() {
        assert_eq!(RequestId::from_seq(1).as_str(), "PA001");
        assert_eq!(RequestId::from_seq(42).as_str(), "PA042");
        assert_eq!(RequestId::from_seq(1234).as_str(), "PA1234");
    }

    #[test]
    fn test_request_id_round_trip() {
        let original = RequestId::from_seq(7);
        let parsed: RequestId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
        assert_eq!(parsed.seq(), 7);
    }

    #[test]
    fn test_request_id_rejects_wrong_prefix() {
        let err = "P001".parse::<RequestId>().unwrap_err();
        assert!(matches!(err, IdError::InvalidSequence(_) | IdError::InvalidPrefix { .. }));
        assert!("CLM001".parse::<RequestId>().is_err());
    }

    #[test]
    fn test_patient_id_display() {
        let id = PatientId::from_seq(3);
        assert_eq!(id.to_string(), "P003");
    }

    #[test]
    fn test_code_ordering_follows_sequence() {
        assert!(RequestId::from_seq(2) < RequestId::from_seq(10));
    }

    #[test]
    fn test_audit_event_id_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id = AuditEventId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }
}
