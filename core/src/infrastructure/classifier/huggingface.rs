use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    common::{ClassifierConfig, entities::app_errors::CoreError},
    triage::{
        entities::{ScoredLabel, UrgencyLabel},
        ports::UrgencyClassifier,
    },
};

use super::sort_ranking;

/// Zero-shot classification through the Hugging Face Inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceZeroShotClassifier {
    api_token: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters {
    candidate_labels: Vec<String>,
}

/// The classic endpoint answers with parallel arrays, the newer router with a
/// list of pairs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZeroShotResponse {
    Parallel { labels: Vec<String>, scores: Vec<f64> },
    Pairs(Vec<LabelScore>),
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

impl ZeroShotResponse {
    fn into_ranking(self) -> Result<Vec<ScoredLabel>, CoreError> {
        let pairs: Vec<(String, f64)> = match self {
            ZeroShotResponse::Parallel { labels, scores } => {
                if labels.len() != scores.len() {
                    return Err(CoreError::ClassifierError(format!(
                        "classifier returned {} labels but {} scores",
                        labels.len(),
                        scores.len()
                    )));
                }
                labels.into_iter().zip(scores).collect()
            }
            ZeroShotResponse::Pairs(pairs) => {
                pairs.into_iter().map(|p| (p.label, p.score)).collect()
            }
        };

        let mut ranking = pairs
            .into_iter()
            .map(|(label, score)| label.parse().map(|label| ScoredLabel::new(label, score)))
            .collect::<Result<Vec<_>, CoreError>>()?;

        sort_ranking(&mut ranking);
        Ok(ranking)
    }
}

impl HuggingFaceZeroShotClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::ConfigurationError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            api_token: config.huggingface_api_token.clone(),
            model_name: config.huggingface_model.clone(),
            base_url: config.huggingface_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl UrgencyClassifier for HuggingFaceZeroShotClassifier {
    async fn classify(
        &self,
        query: String,
        candidate_labels: Vec<UrgencyLabel>,
    ) -> Result<Vec<ScoredLabel>, CoreError> {
        let url = format!("{}/models/{}", self.base_url, self.model_name);
        let request = ZeroShotRequest {
            inputs: &query,
            parameters: ZeroShotParameters {
                candidate_labels: candidate_labels
                    .iter()
                    .map(|l| l.as_str().to_string())
                    .collect(),
            },
        };

        let mut builder = self.client.post(&url).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Classifier request failed: {}", e);
            CoreError::ClassifierError(format!("request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Classifier API error: {} - {}", status, error_text);
            return Err(CoreError::ClassifierError(format!(
                "API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: ZeroShotResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse classifier response: {}", e);
            CoreError::ClassifierError(format!("failed to parse response: {}", e))
        })?;

        let ranking = body.into_ranking()?;
        debug!(?ranking, "zero-shot ranking");

        Ok(ranking)
    }
}
