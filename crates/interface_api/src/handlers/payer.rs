//! Payer interface handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use domain_pa::{PaRequest, PaStatus, Role};

use crate::auth::Session;
use crate::dto::dashboard::{
    ChecklistItem, Dashboard, DecisionItem, Metric, PayerTab, Placeholder, SummaryCard, Welcome,
};
use crate::dto::layout::LayoutShell;
use crate::dto::requests::{ActionResponse, DecisionRequest, RequestRow, ReviewRequest};
use crate::error::ApiError;
use crate::handlers::{parse_request_id, TabQuery};
use crate::AppState;

fn count(requests: &[PaRequest], status: PaStatus) -> u32 {
    requests.iter().filter(|r| r.status == status).count() as u32
}

fn summary_cards(all: &[PaRequest]) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            value: count(all, PaStatus::PendingReview),
            description: "Pending Review",
            accent: "healthcare-orange",
        },
        SummaryCard {
            value: count(all, PaStatus::ReadyForDecision),
            description: "Ready for Decision",
            accent: "healthcare-blue",
        },
        SummaryCard {
            value: count(all, PaStatus::Approved),
            description: "Approved",
            accent: "healthcare-green",
        },
        SummaryCard {
            value: count(all, PaStatus::Denied),
            description: "Denied",
            accent: "healthcare-red",
        },
    ]
}

fn decision_panel(queue: &[PaRequest]) -> Vec<DecisionItem> {
    queue
        .iter()
        .filter(|r| r.status == PaStatus::ReadyForDecision)
        .map(|request| DecisionItem {
            request: request.into(),
            checklist: vec![
                ChecklistItem {
                    label: "Patient eligibility verified",
                    passed: true,
                },
                ChecklistItem {
                    label: "Prescriber credentials valid",
                    passed: true,
                },
                ChecklistItem {
                    label: "Drug coverage confirmed",
                    passed: true,
                },
                ChecklistItem {
                    label: "All required documents present",
                    passed: request.is_complete(),
                },
            ],
        })
        .collect()
}

fn analytics(all: &[PaRequest]) -> Vec<Metric> {
    let approved = count(all, PaStatus::Approved);
    let denied = count(all, PaStatus::Denied);
    let decided = approved + denied;
    let approval_rate = if decided == 0 {
        "-".to_string()
    } else {
        format!("{}%", approved * 100 / decided)
    };

    // Days from submission to the completed decision step, averaged over
    // decided requests.
    let decision_days: Vec<i64> = all
        .iter()
        .filter(|r| r.status.is_terminal())
        .filter_map(|r| {
            r.timeline
                .steps()
                .iter()
                .find(|s| s.name == "Payer Decision" && s.completed)
                .map(|s| (s.date - r.submitted).num_days())
        })
        .collect();
    let avg_days = if decision_days.is_empty() {
        "-".to_string()
    } else {
        format!(
            "{:.1}",
            decision_days.iter().sum::<i64>() as f64 / decision_days.len() as f64
        )
    };

    vec![
        Metric {
            value: approval_rate,
            label: "Approval Rate",
        },
        Metric {
            value: avg_days,
            label: "Avg. Days to Decision",
        },
        Metric {
            value: all.len().to_string(),
            label: "Requests This Month",
        },
    ]
}

/// Renders the payer interface for the selected tab
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TabQuery>,
) -> Result<Json<Dashboard<PayerTab>>, ApiError> {
    session.require(Role::Payer)?;

    let tab = query.tab();
    let all = state.repo.list().await?;
    let queue = state.repo.list_for(Role::Payer).await?;

    let content = match tab.as_str() {
        "overview" => PayerTab::Overview {
            welcome: Welcome {
                heading: format!("{} - PA Review Dashboard", session.display_name()),
                message: "Review and process prior authorization requests",
            },
            cards: summary_cards(&all),
            urgent: queue
                .iter()
                .filter(|r| r.priority.is_urgent())
                .map(RequestRow::from)
                .collect(),
            recent: queue.iter().take(3).map(RequestRow::from).collect(),
        },
        "incoming" => PayerTab::Incoming {
            requests: queue.iter().map(RequestRow::from).collect(),
        },
        "decisions" => PayerTab::Decisions {
            panel: decision_panel(&queue),
        },
        "analytics" => PayerTab::Analytics {
            metrics: analytics(&all),
        },
        "audit" => PayerTab::Audit {
            trail: state.audit.trail().await?,
        },
        other => PayerTab::Placeholder(Placeholder::for_tab(other)),
    };

    let layout = LayoutShell::for_role(Role::Payer, session.display_name(), &tab);
    Ok(Json(Dashboard { layout, tab, content }))
}

/// Completes review of a pending-review request
pub async fn complete_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(body): Json<ReviewRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    session.require(Role::Payer)?;
    let id = parse_request_id(&id)?;

    let (to, toast) = match body.outcome.as_str() {
        "ready" | "ready-for-decision" => (
            PaStatus::ReadyForDecision,
            format!("PA request {id} ready for decision"),
        ),
        "needs-info" => (
            PaStatus::NeedsInfo,
            format!("PA request {id} needs more information"),
        ),
        other => {
            return Err(ApiError::Validation(format!("unknown review outcome: {other}")));
        }
    };

    let request = state.repo.transition(&id, to, session.actor(), None).await?;

    Ok(Json(ActionResponse {
        toast,
        request: (&request).into(),
    }))
}

/// Records the payer's decision on a request
pub async fn decide(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(body): Json<DecisionRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    session.require(Role::Payer)?;
    let id = parse_request_id(&id)?;

    let (to, phrase) = match body.decision.as_str() {
        "approved" => (PaStatus::Approved, "approved"),
        "denied" => (PaStatus::Denied, "denied"),
        "request-info" => (PaStatus::NeedsInfo, "requested more info"),
        other => {
            return Err(ApiError::Validation(format!("unknown decision: {other}")));
        }
    };

    let request = state
        .repo
        .transition(&id, to, session.actor(), body.note)
        .await?;

    Ok(Json(ActionResponse {
        toast: format!("PA request {id} {phrase}"),
        request: (&request).into(),
    }))
}

/// Routes a ready-for-decision request to the prescriber for sign-off
pub async fn request_signature(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, ApiError> {
    session.require(Role::Payer)?;
    let id = parse_request_id(&id)?;

    let request = state
        .repo
        .transition(&id, PaStatus::PendingSignature, session.actor(), None)
        .await?;

    Ok(Json(ActionResponse {
        toast: format!("PA request {id} routed for signature"),
        request: (&request).into(),
    }))
}
