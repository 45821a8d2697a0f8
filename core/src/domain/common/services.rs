use std::sync::Arc;

use crate::domain::{
    common::TriageConfig,
    triage::ports::{LLMClient, UrgencyClassifier},
};

/// Holds the external collaborators shared by every request.
///
/// Both clients are built once at startup and only ever read afterwards, so
/// cloning the service hands out another reference to the same instances.
#[derive(Debug)]
pub struct Service<UC, LLM>
where
    UC: UrgencyClassifier,
    LLM: LLMClient,
{
    pub(crate) urgency_classifier: Arc<UC>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) structured_output: bool,
}

impl<UC, LLM> Service<UC, LLM>
where
    UC: UrgencyClassifier,
    LLM: LLMClient,
{
    pub fn new(urgency_classifier: UC, llm_client: LLM, config: &TriageConfig) -> Self {
        Self {
            urgency_classifier: Arc::new(urgency_classifier),
            llm_client: Arc::new(llm_client),
            structured_output: config.llm.structured_output,
        }
    }
}

impl<UC, LLM> Clone for Service<UC, LLM>
where
    UC: UrgencyClassifier,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            urgency_classifier: Arc::clone(&self.urgency_classifier),
            llm_client: Arc::clone(&self.llm_client),
            structured_output: self.structured_output,
        }
    }
}
