pub mod huggingface;
pub mod keyword;

pub use huggingface::HuggingFaceZeroShotClassifier;
pub use keyword::KeywordUrgencyClassifier;

use crate::domain::{
    common::{ClassifierBackendKind, ClassifierConfig, entities::app_errors::CoreError},
    triage::{
        entities::{ScoredLabel, UrgencyLabel},
        ports::UrgencyClassifier,
    },
};

/// Classifier selected at startup from configuration.
#[derive(Debug, Clone)]
pub enum ClassifierBackend {
    HuggingFace(HuggingFaceZeroShotClassifier),
    Keyword(KeywordUrgencyClassifier),
}

impl ClassifierBackend {
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, CoreError> {
        match config.backend {
            ClassifierBackendKind::HuggingFace => Ok(Self::HuggingFace(
                HuggingFaceZeroShotClassifier::new(config)?,
            )),
            ClassifierBackendKind::Keyword => Ok(Self::Keyword(KeywordUrgencyClassifier)),
        }
    }
}

impl UrgencyClassifier for ClassifierBackend {
    async fn classify(
        &self,
        query: String,
        candidate_labels: Vec<UrgencyLabel>,
    ) -> Result<Vec<ScoredLabel>, CoreError> {
        match self {
            Self::HuggingFace(classifier) => classifier.classify(query, candidate_labels).await,
            Self::Keyword(classifier) => classifier.classify(query, candidate_labels).await,
        }
    }
}

/// Sorts a ranking by descending score, keeping candidate order on ties.
pub(crate) fn sort_ranking(ranking: &mut [ScoredLabel]) {
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
}
