//! Pharmacy dashboard handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use domain_pa::{PaRequest, PaStatus, PaSubmission, Role};

use crate::auth::Session;
use crate::dto::dashboard::{
    Dashboard, FormSchema, PharmacyTab, Placeholder, SummaryCard, TrackFilters, Welcome,
};
use crate::dto::layout::LayoutShell;
use crate::dto::requests::{ActionResponse, RequestRow, SubmitResponse};
use crate::error::ApiError;
use crate::handlers::{parse_request_id, TabQuery};
use crate::AppState;

fn count(requests: &[PaRequest], status: PaStatus) -> u32 {
    requests.iter().filter(|r| r.status == status).count() as u32
}

fn summary_cards(requests: &[PaRequest]) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            value: count(requests, PaStatus::PendingReview),
            description: "Pending Requests",
            accent: "healthcare-orange",
        },
        SummaryCard {
            value: count(requests, PaStatus::Approved),
            description: "Approvals",
            accent: "healthcare-green",
        },
        SummaryCard {
            value: count(requests, PaStatus::NeedsInfo),
            description: "Resubmissions",
            accent: "healthcare-blue",
        },
        SummaryCard {
            value: count(requests, PaStatus::Denied),
            description: "Denied",
            accent: "healthcare-red",
        },
    ]
}

/// Renders the pharmacy dashboard for the selected tab
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TabQuery>,
) -> Result<Json<Dashboard<PharmacyTab>>, ApiError> {
    session.require(Role::Pharmacy)?;

    let tab = query.tab();
    let requests = state.repo.list_for(Role::Pharmacy).await?;

    let content = match tab.as_str() {
        "overview" => PharmacyTab::Overview {
            welcome: Welcome {
                heading: format!("Welcome back, {}", session.display_name()),
                message: "Manage your prior authorization requests efficiently",
            },
            cards: summary_cards(&requests),
            recent: requests.iter().take(3).map(RequestRow::from).collect(),
        },
        "new-request" => PharmacyTab::NewRequest {
            form: FormSchema::new_pa(),
        },
        "track-requests" => {
            let filter = query.status_filter();
            PharmacyTab::TrackRequests {
                filters: TrackFilters::default(),
                requests: requests
                    .iter()
                    .filter(|r| filter.map_or(true, |status| r.status == status))
                    .map(RequestRow::from)
                    .collect(),
            }
        }
        "patients" => PharmacyTab::Patients {
            patients: state.repo.patients().await?,
        },
        other => PharmacyTab::Placeholder(Placeholder::for_tab(other)),
    };

    let layout = LayoutShell::for_role(Role::Pharmacy, session.display_name(), &tab);
    Ok(Json(Dashboard { layout, tab, content }))
}

/// Submits a new PA request
///
/// Required fields missing yields the prototype's validation toast; a
/// successful submission is appended to the store and the client is
/// directed to the tracking tab.
pub async fn submit_request(
    State(state): State<AppState>,
    session: Session,
    Json(mut form): Json<PaSubmission>,
) -> Result<Json<SubmitResponse>, ApiError> {
    session.require(Role::Pharmacy)?;

    form.patient_name = form.patient_name.trim().to_string();
    form.drug_name = form.drug_name.trim().to_string();
    form.prescriber_name = form.prescriber_name.trim().to_string();
    form.validate()
        .map_err(|_| ApiError::Validation("Please fill in required fields".to_string()))?;

    let request = state.repo.submit(form, session.display_name()).await?;

    Ok(Json(SubmitResponse {
        toast: "PA request submitted successfully".to_string(),
        next_tab: "track-requests",
        request: RequestRow::from(&request),
    }))
}

/// Supplies the documentation a needs-info request is waiting on
pub async fn supply_info(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, ApiError> {
    session.require(Role::Pharmacy)?;

    let id = parse_request_id(&id)?;
    let request = state.repo.supply_info(&id, session.display_name()).await?;

    Ok(Json(ActionResponse {
        toast: format!("Additional information submitted for {id}"),
        request: (&request).into(),
    }))
}
