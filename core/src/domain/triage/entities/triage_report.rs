use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    triage::{entities::ParsedAdvice, entities::UrgencyResult, prompt::DISCLAIMER},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TriageReport {
    pub id: Uuid,
    pub query: String,
    pub urgency: UrgencyResult,
    /// `urgency.confidence` as a whole percentage.
    pub confidence_percent: u8,
    pub advisory: String,
    pub advice: ParsedAdvice,
    pub raw_response: String,
    /// False when the advice generator failed and `advice` only holds fallbacks.
    pub advice_available: bool,
    pub disclaimer: String,
    pub created_at: DateTime<Utc>,
}

impl TriageReport {
    pub fn new(
        query: String,
        urgency: UrgencyResult,
        advice: ParsedAdvice,
        raw_response: String,
        advice_available: bool,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            query,
            confidence_percent: urgency.confidence_percent(),
            advisory: urgency.advisory().to_string(),
            urgency,
            advice,
            raw_response,
            advice_available,
            disclaimer: DISCLAIMER.to_string(),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::triage::entities::UrgencyLabel;

    #[test]
    fn test_report_carries_confidence_percent_and_advisory() {
        let urgency = UrgencyResult::new(UrgencyLabel::SelfCare, 0.8249);
        let report = TriageReport::new(
            "mild headache".to_string(),
            urgency,
            ParsedAdvice::default(),
            String::new(),
            false,
        );

        assert_eq!(report.confidence_percent, 82);
        assert_eq!(report.advisory, UrgencyLabel::SelfCare.advisory());
        assert_eq!(report.disclaimer, DISCLAIMER);
        assert_eq!(report.id.get_version_num(), 7);
    }
}
