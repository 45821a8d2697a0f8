use tracing::{instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    triage::{
        entities::{TriageReport, UrgencyLabel, UrgencyLabelInfo, UrgencyResult},
        parser::{parse_advice, parse_structured_advice},
        ports::{LLMClient, TriageService, UrgencyClassifier},
        prompt::{advice_error_placeholder, build_advice_prompt},
        schema::get_triage_advice_schema,
        value_objects::{SymptomQuery, TriageInput},
    },
};

impl<UC, LLM> Service<UC, LLM>
where
    UC: UrgencyClassifier,
    LLM: LLMClient,
{
    async fn classify_urgency(&self, query: &SymptomQuery) -> Result<UrgencyResult, CoreError> {
        let ranking = self
            .urgency_classifier
            .classify(query.as_str().to_string(), UrgencyLabel::ALL.to_vec())
            .await
            .map_err(|e| match e {
                CoreError::ClassifierError(_) => e,
                other => CoreError::ClassifierError(other.to_string()),
            })?;

        UrgencyResult::from_ranking(ranking).ok_or_else(|| {
            CoreError::ClassifierError("classifier returned an empty ranking".to_string())
        })
    }

    /// Calls the advice generator. A failed call is turned into placeholder
    /// text so the rest of the pipeline still produces a report.
    async fn generate_advice(&self, query: &SymptomQuery) -> (String, bool) {
        let prompt = build_advice_prompt(query.as_str());
        let response_schema = self.structured_output.then(get_triage_advice_schema);

        match self
            .llm_client
            .generate_with_text(prompt, response_schema)
            .await
        {
            Ok(text) => (text, true),
            Err(e) => {
                warn!(error = %e, "advice generation failed, using placeholder");
                (advice_error_placeholder(&e), false)
            }
        }
    }
}

impl<UC, LLM> TriageService for Service<UC, LLM>
where
    UC: UrgencyClassifier,
    LLM: LLMClient,
{
    #[instrument(skip_all)]
    async fn triage(&self, input: TriageInput) -> Result<TriageReport, CoreError> {
        let query = SymptomQuery::parse(input.symptoms)?;

        // 1. Classify urgency
        let urgency = self.classify_urgency(&query).await?;
        tracing::info!(
            label = %urgency.label,
            confidence = urgency.confidence,
            "urgency classified"
        );

        // 2. Generate advice, regardless of urgency
        let (raw_response, advice_available) = self.generate_advice(&query).await;

        // 3. Parse
        let advice = if self.structured_output && advice_available {
            parse_structured_advice(&raw_response).unwrap_or_else(|| {
                warn!("structured advice could not be decoded, parsing as prose");
                parse_advice(&raw_response)
            })
        } else {
            parse_advice(&raw_response)
        };

        Ok(TriageReport::new(
            query.into_inner(),
            urgency,
            advice,
            raw_response,
            advice_available,
        ))
    }

    fn urgency_labels(&self) -> Vec<UrgencyLabelInfo> {
        UrgencyLabel::ALL.into_iter().map(UrgencyLabelInfo::from).collect()
    }
}
