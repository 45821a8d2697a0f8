use tracing::info;

use crate::{
    domain::common::{TriageConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{classifier::ClassifierBackend, llm::GeminiLLMClient},
};

pub type SymptomTriageService = Service<ClassifierBackend, GeminiLLMClient>;

/// Builds the collaborators once for the whole process.
pub fn create_service(config: TriageConfig) -> Result<SymptomTriageService, CoreError> {
    let urgency_classifier = ClassifierBackend::from_config(&config.classifier)?;
    let llm_client = GeminiLLMClient::new(&config.llm)?;

    info!(
        classifier = ?config.classifier.backend,
        model = %config.llm.gemini_model,
        structured_output = config.llm.structured_output,
        "triage service initialized"
    );

    Ok(Service::new(urgency_classifier, llm_client, &config))
}
