use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use triage_core::domain::triage::{entities::UrgencyLabelInfo, ports::TriageService};
use utoipa::ToSchema;

use crate::{
    application::http::server::app_state::AppState,
    args::ClassifierBackendArg,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfigResponse {
    pub classifier_backend: String,
    pub classifier_model: Option<String>,
    pub llm_model: String,
    pub structured_output: bool,
    pub labels: Vec<UrgencyLabelInfo>,
}

/// Public runtime settings. Secrets are never included.
#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get runtime configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let classifier = &state.args.classifier;

    let (classifier_backend, classifier_model) = match classifier.backend {
        ClassifierBackendArg::Huggingface => {
            ("huggingface".to_string(), Some(classifier.hf_model.clone()))
        }
        ClassifierBackendArg::Keyword => ("keyword".to_string(), None),
    };

    Json(ConfigResponse {
        classifier_backend,
        classifier_model,
        llm_model: state.args.llm.gemini_model.clone(),
        structured_output: state.args.llm.structured_output,
        labels: state.service.urgency_labels(),
    })
}
