//! Per-role request projections

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::request::{PaRequest, PaStatus};

/// The four dashboard roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Pharmacy,
    Provider,
    Payer,
    Patient,
}

impl Role {
    /// All roles
    pub fn all() -> [Role; 4] {
        [Role::Pharmacy, Role::Provider, Role::Payer, Role::Patient]
    }

    /// The URL path segment / login value for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Pharmacy => "pharmacy",
            Role::Provider => "provider",
            Role::Payer => "payer",
            Role::Patient => "patient",
        }
    }

    /// Whether a request is visible on this role's dashboard
    ///
    /// Pharmacies track everything they submitted; providers see only
    /// requests awaiting their action; payers see only their review and
    /// decision queues; patients see everything, read-only.
    pub fn sees(&self, status: PaStatus) -> bool {
        match self {
            Role::Pharmacy | Role::Patient => true,
            Role::Provider => {
                matches!(status, PaStatus::PendingSignature | PaStatus::NeedsInfo)
            }
            Role::Payer => {
                matches!(status, PaStatus::PendingReview | PaStatus::ReadyForDecision)
            }
        }
    }

    /// Filters a request list down to this role's projection
    pub fn project<'a>(&self, requests: &'a [PaRequest]) -> Vec<&'a PaRequest> {
        requests.iter().filter(|r| self.sees(r.status)).collect()
    }

    /// Patients view requests read-only; the other roles can act
    pub fn read_only(&self) -> bool {
        matches!(self, Role::Patient)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pharmacy" => Ok(Role::Pharmacy),
            "provider" => Ok(Role::Provider),
            "payer" => Ok(Role::Payer),
            "patient" => Ok(Role::Patient),
            other => Err(format!("unknown role: {other}")),
        }
    }
}
