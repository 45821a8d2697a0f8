use utoipa::OpenApi;

use crate::application::http::{
    health::__path_health_live, server::config::__path_get_config, triage::router::TriageApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Triagekit API",
        description = "Symptom urgency classification and general self-care guidance. Not a medical diagnosis."
    ),
    paths(get_config),
    nest(
        (path = "/triage", api = TriageApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[derive(OpenApi)]
#[openapi(paths(health_live))]
pub struct HealthApiDoc;
