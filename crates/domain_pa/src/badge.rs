//! Status and priority presentation table
//!
//! One lookup shared by every dashboard, so identical status always renders
//! with identical icon, label, and style.

use serde::Serialize;

use crate::request::{PaStatus, Priority};

/// Presentation attributes for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    /// Icon name
    pub icon: &'static str,
    /// Badge label
    pub label: &'static str,
    /// Style class
    pub style: &'static str,
}

/// Presentation attributes for a priority flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityBadge {
    pub label: &'static str,
    pub style: &'static str,
}

/// Maps a status to its badge
pub fn status_badge(status: PaStatus) -> StatusBadge {
    match status {
        PaStatus::Submitted => StatusBadge {
            icon: "clock",
            label: "SUBMITTED",
            style: "status-pending",
        },
        PaStatus::PendingReview => StatusBadge {
            icon: "clock",
            label: "PENDING REVIEW",
            style: "status-pending",
        },
        PaStatus::NeedsInfo => StatusBadge {
            icon: "alert-circle",
            label: "NEEDS INFO",
            style: "status-needs-info",
        },
        PaStatus::ReadyForDecision => StatusBadge {
            icon: "alert-circle",
            label: "READY FOR DECISION",
            style: "status-needs-info",
        },
        PaStatus::PendingSignature => StatusBadge {
            icon: "pen-tool",
            label: "PENDING SIGNATURE",
            style: "status-pending",
        },
        PaStatus::Signed => StatusBadge {
            icon: "check-circle",
            label: "SIGNED",
            style: "status-approved",
        },
        PaStatus::Approved => StatusBadge {
            icon: "check-circle",
            label: "APPROVED",
            style: "status-approved",
        },
        PaStatus::Denied => StatusBadge {
            icon: "x-circle",
            label: "DENIED",
            style: "status-denied",
        },
    }
}

/// Maps a priority flag to its badge
pub fn priority_badge(priority: Priority) -> PriorityBadge {
    match priority {
        Priority::Standard => PriorityBadge {
            label: "STANDARD",
            style: "priority-standard",
        },
        Priority::Urgent => PriorityBadge {
            label: "URGENT",
            style: "priority-urgent",
        },
    }
}
