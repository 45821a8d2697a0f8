use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Triage classification of a symptom description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum UrgencyLabel {
    Emergency,
    Routine,
    #[serde(rename = "Self-care")]
    SelfCare,
}

impl UrgencyLabel {
    /// Candidate labels in the order they are offered to the classifier.
    pub const ALL: [UrgencyLabel; 3] = [
        UrgencyLabel::Emergency,
        UrgencyLabel::Routine,
        UrgencyLabel::SelfCare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLabel::Emergency => "Emergency",
            UrgencyLabel::Routine => "Routine",
            UrgencyLabel::SelfCare => "Self-care",
        }
    }

    /// Message shown alongside the predicted label.
    pub fn advisory(&self) -> &'static str {
        match self {
            UrgencyLabel::Emergency => {
                "Your symptoms may require immediate medical attention. Please seek emergency care right away. Stay calm and safe."
            }
            UrgencyLabel::Routine => {
                "Your symptoms suggest you should schedule an appointment with your healthcare provider soon."
            }
            UrgencyLabel::SelfCare => {
                "Your symptoms appear mild and may be managed with self-care. Monitor your condition and consult a healthcare professional if symptoms worsen."
            }
        }
    }
}

impl fmt::Display for UrgencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "emergency" => Ok(UrgencyLabel::Emergency),
            "routine" => Ok(UrgencyLabel::Routine),
            "selfcare" => Ok(UrgencyLabel::SelfCare),
            _ => Err(CoreError::ClassifierError(format!(
                "unknown urgency label: {s}"
            ))),
        }
    }
}

/// One entry of a classifier ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoredLabel {
    pub label: UrgencyLabel,
    pub score: f64,
}

impl ScoredLabel {
    pub fn new(label: UrgencyLabel, score: f64) -> Self {
        Self { label, score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UrgencyResult {
    pub label: UrgencyLabel,
    /// Confidence of the top label, clamped to `[0, 1]`.
    pub confidence: f64,
}

impl UrgencyResult {
    pub fn new(label: UrgencyLabel, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };

        Self { label, confidence }
    }

    /// Picks the highest scored entry of a ranking. Ties keep the earlier entry.
    pub fn from_ranking(ranking: Vec<ScoredLabel>) -> Option<Self> {
        ranking
            .into_iter()
            .reduce(|best, next| if next.score > best.score { next } else { best })
            .map(|top| Self::new(top.label, top.score))
    }

    pub fn advisory(&self) -> &'static str {
        self.label.advisory()
    }

    /// Confidence as a whole percentage, e.g. `82` for `0.82`.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UrgencyLabelInfo {
    pub label: UrgencyLabel,
    pub advisory: String,
}

impl From<UrgencyLabel> for UrgencyLabelInfo {
    fn from(label: UrgencyLabel) -> Self {
        Self {
            label,
            advisory: label.advisory().to_string(),
        }
    }
}
