use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_triage::{__path_create_triage, create_triage},
    get_urgency_labels::{__path_get_urgency_labels, get_urgency_labels},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_triage, get_urgency_labels))]
pub struct TriageApiDoc;

pub fn triage_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/triage"), post(create_triage))
        .route(&format!("{root_path}/triage/labels"), get(get_urgency_labels))
}
