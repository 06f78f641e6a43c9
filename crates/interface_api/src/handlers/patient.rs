//! Patient view handler

use axum::{
    extract::{Query, State},
    Json,
};

use domain_pa::Role;

use crate::auth::Session;
use crate::dto::dashboard::{Dashboard, PatientView};
use crate::dto::layout::LayoutShell;
use crate::dto::requests::RequestDetail;
use crate::error::ApiError;
use crate::handlers::TabQuery;
use crate::AppState;

/// Renders the read-only patient view
///
/// Requests relate to the patient by display-name match; there is no
/// referential key in the data.
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TabQuery>,
) -> Result<Json<Dashboard<PatientView>>, ApiError> {
    session.require(Role::Patient)?;

    let roster = state.repo.patients().await?;
    let patient = roster
        .iter()
        .find(|p| p.name == session.display_name())
        .ok_or_else(|| ApiError::NotFound("Patient not on file".to_string()))?;
    let profile = state.repo.patient_profile(&patient.id).await?;

    let requests: Vec<RequestDetail> = state
        .repo
        .list_for(Role::Patient)
        .await?
        .iter()
        .filter(|r| r.patient == profile.patient.name)
        .map(RequestDetail::from)
        .collect();

    let tab = query.tab();
    let layout = LayoutShell::for_role(Role::Patient, session.display_name(), &tab);
    Ok(Json(Dashboard {
        layout,
        tab,
        content: PatientView {
            profile,
            requests,
            read_only: Role::Patient.read_only(),
        },
    }))
}
