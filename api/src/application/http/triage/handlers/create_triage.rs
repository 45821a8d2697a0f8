use axum::extract::State;
use serde::{Deserialize, Serialize};
use triage_core::domain::triage::{
    entities::TriageReport, ports::TriageService, value_objects::TriageInput,
};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    triage::validators::CreateTriageRequest,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TriageResponse {
    pub data: TriageReport,
}

#[utoipa::path(
    post,
    path = "",
    tag = "triage",
    summary = "Triage a symptom description",
    description = "Classifies urgency and asks the language model for a likely condition, foods and medicines. A failed advice call still returns 200 with `advice_available = false`.",
    responses(
        (status = 200, body = TriageResponse),
        (status = 400, body = ApiErrorResponse, description = "Blank or oversized symptoms"),
        (status = 502, body = ApiErrorResponse, description = "Urgency classifier unavailable")
    ),
    request_body = CreateTriageRequest
)]
pub async fn create_triage(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateTriageRequest>,
) -> Result<Response<TriageResponse>, ApiError> {
    let report = state
        .service
        .triage(TriageInput {
            symptoms: payload.symptoms,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(TriageResponse { data: report }))
}
