//! Provider portal handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use domain_pa::{PaRequest, PaStatus, Role};

use crate::auth::Session;
use crate::dto::dashboard::{Dashboard, Placeholder, ProviderTab, SummaryCard, Welcome};
use crate::dto::layout::LayoutShell;
use crate::dto::requests::{ActionResponse, RequestDetail};
use crate::error::ApiError;
use crate::handlers::{parse_request_id, TabQuery};
use crate::AppState;

fn summary_cards(requests: &[PaRequest], patient_count: usize) -> Vec<SummaryCard> {
    let pending_signature = requests
        .iter()
        .filter(|r| r.status == PaStatus::PendingSignature)
        .count() as u32;
    let needs_info = requests
        .iter()
        .filter(|r| r.status == PaStatus::NeedsInfo)
        .count() as u32;

    vec![
        SummaryCard {
            value: pending_signature,
            description: "Pending Signatures",
            accent: "healthcare-orange",
        },
        SummaryCard {
            value: needs_info,
            description: "Needs Review",
            accent: "healthcare-blue",
        },
        SummaryCard {
            value: patient_count as u32,
            description: "Patients",
            accent: "healthcare-green",
        },
    ]
}

/// Renders the provider portal for the selected tab
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TabQuery>,
) -> Result<Json<Dashboard<ProviderTab>>, ApiError> {
    session.require(Role::Provider)?;

    let tab = query.tab();
    let requests = state.repo.list_for(Role::Provider).await?;
    let patients = state.repo.patients().await?;

    let content = match tab.as_str() {
        "overview" => ProviderTab::Overview {
            welcome: Welcome {
                heading: format!("Welcome back, {}", session.display_name()),
                message: "Review and sign prior authorization requests",
            },
            cards: summary_cards(&requests, patients.len()),
            recent: requests.iter().take(3).map(RequestDetail::from).collect(),
        },
        "pa-requests" => ProviderTab::PaRequests {
            requests: requests.iter().map(RequestDetail::from).collect(),
        },
        "patients" => ProviderTab::Patients { patients },
        "signature" => ProviderTab::Signature {
            pending: requests
                .iter()
                .filter(|r| r.status == PaStatus::PendingSignature)
                .map(RequestDetail::from)
                .collect(),
        },
        other => ProviderTab::Placeholder(Placeholder::for_tab(other)),
    };

    let layout = LayoutShell::for_role(Role::Provider, session.display_name(), &tab);
    Ok(Json(Dashboard { layout, tab, content }))
}

/// Signs a request awaiting the prescriber
///
/// Sign-off is two lifecycle steps applied together: the signature itself,
/// then the return to the payer's decision queue.
pub async fn sign_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, ApiError> {
    session.require(Role::Provider)?;

    let id = parse_request_id(&id)?;
    let actor = session.display_name().to_string();

    state
        .repo
        .transition(&id, PaStatus::Signed, &actor, None)
        .await?;
    let request = state
        .repo
        .transition(&id, PaStatus::ReadyForDecision, &actor, None)
        .await?;

    Ok(Json(ActionResponse {
        toast: format!("PA request {id} signed successfully"),
        request: (&request).into(),
    }))
}
