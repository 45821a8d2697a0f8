use axum::extract::State;
use serde::{Deserialize, Serialize};
use triage_core::domain::triage::{entities::UrgencyLabelInfo, ports::TriageService};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UrgencyLabelsResponse {
    pub data: Vec<UrgencyLabelInfo>,
}

#[utoipa::path(
    get,
    path = "/labels",
    tag = "triage",
    summary = "List urgency labels",
    description = "The candidate labels in classifier order, each with its advisory message.",
    responses(
        (status = 200, body = UrgencyLabelsResponse)
    )
)]
pub async fn get_urgency_labels(
    State(state): State<AppState>,
) -> Result<Response<UrgencyLabelsResponse>, ApiError> {
    Ok(Response::OK(UrgencyLabelsResponse {
        data: state.service.urgency_labels(),
    }))
}
