use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    triage::{
        entities::{ScoredLabel, TriageReport, UrgencyLabel, UrgencyLabelInfo},
        value_objects::TriageInput,
    },
};

/// Ranks a symptom description against a fixed set of urgency labels.
///
/// Implementations return every candidate they scored, sorted by descending score.
#[cfg_attr(test, mockall::automock)]
pub trait UrgencyClassifier: Send + Sync {
    fn classify(
        &self,
        query: String,
        candidate_labels: Vec<UrgencyLabel>,
    ) -> impl Future<Output = Result<Vec<ScoredLabel>, CoreError>> + Send;
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends a text prompt. A `response_schema` asks the model for JSON output.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for symptom triage
#[cfg_attr(test, mockall::automock)]
pub trait TriageService: Send + Sync {
    fn triage(
        &self,
        input: TriageInput,
    ) -> impl Future<Output = Result<TriageReport, CoreError>> + Send;

    fn urgency_labels(&self) -> Vec<UrgencyLabelInfo>;
}
