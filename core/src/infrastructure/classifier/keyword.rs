use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    triage::{
        entities::{ScoredLabel, UrgencyLabel},
        ports::UrgencyClassifier,
    },
};

use super::sort_ranking;

const EMERGENCY_PATTERNS: &[&str] = &[
    "chest pain",
    "chest tightness",
    "crushing",
    "can't breathe",
    "cannot breathe",
    "difficulty breathing",
    "shortness of breath",
    "short of breath",
    "unconscious",
    "passed out",
    "fainted",
    "seizure",
    "stroke",
    "slurred speech",
    "face drooping",
    "numbness on one side",
    "severe bleeding",
    "bleeding heavily",
    "coughing blood",
    "vomiting blood",
    "suicidal",
    "overdose",
    "anaphylaxis",
    "throat swelling",
    "worst headache",
    "stiff neck",
    "severe burn",
    "heart attack",
];

const ROUTINE_PATTERNS: &[&str] = &[
    "persistent",
    "recurring",
    "keeps coming back",
    "for weeks",
    "for a week",
    "for months",
    "several days",
    "chronic",
    "not improving",
    "getting worse",
    "worse",
    "lump",
    "rash",
    "blood pressure",
    "fever",
    "infection",
    "swollen",
    "unexplained",
    "weight loss",
];

const SELF_CARE_PATTERNS: &[&str] = &[
    "mild",
    "slight",
    "minor",
    "a bit",
    "runny nose",
    "sneezing",
    "sore throat",
    "tired",
    "headache",
    "cold",
    "stuffy",
    "itchy",
    "bruise",
];

const EMERGENCY_WEIGHT: f64 = 3.0;
const ROUTINE_WEIGHT: f64 = 1.5;
const SELF_CARE_WEIGHT: f64 = 1.0;
/// Floor added to every label so that a text without hits still leans self-care.
const BASELINE: f64 = 0.25;
const SELF_CARE_PRIOR: f64 = 1.0;

/// Offline urgency classifier matching symptom phrases.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordUrgencyClassifier;

/// Whole-word alternation over `keywords`, longest phrase first so that
/// "getting worse" wins over "worse".
fn keyword_pattern(keywords: &[&str]) -> Regex {
    let mut keywords = keywords.to_vec();
    keywords.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("valid keyword regex")
}

static EMERGENCY_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(EMERGENCY_PATTERNS));
static ROUTINE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(ROUTINE_PATTERNS));
static SELF_CARE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(SELF_CARE_PATTERNS));

/// Number of distinct phrases found.
fn hits(text: &str, keywords: &Regex) -> usize {
    keywords
        .find_iter(text)
        .map(|m| m.as_str())
        .collect::<HashSet<_>>()
        .len()
}

impl KeywordUrgencyClassifier {
    pub fn rank(&self, query: &str, candidate_labels: &[UrgencyLabel]) -> Vec<ScoredLabel> {
        let text = query.to_lowercase().replace('’', "'");

        let raw_score = |label: &UrgencyLabel| -> f64 {
            BASELINE
                + match label {
                    UrgencyLabel::Emergency => {
                        EMERGENCY_WEIGHT * hits(&text, &EMERGENCY_KEYWORDS) as f64
                    }
                    UrgencyLabel::Routine => ROUTINE_WEIGHT * hits(&text, &ROUTINE_KEYWORDS) as f64,
                    UrgencyLabel::SelfCare => {
                        SELF_CARE_PRIOR + SELF_CARE_WEIGHT * hits(&text, &SELF_CARE_KEYWORDS) as f64
                    }
                }
        };

        let raw: Vec<(UrgencyLabel, f64)> = candidate_labels
            .iter()
            .map(|label| (*label, raw_score(label)))
            .collect();
        let total: f64 = raw.iter().map(|(_, score)| score).sum();

        let mut ranking: Vec<ScoredLabel> = raw
            .into_iter()
            .map(|(label, score)| ScoredLabel::new(label, score / total))
            .collect();

        sort_ranking(&mut ranking);
        ranking
    }
}

impl UrgencyClassifier for KeywordUrgencyClassifier {
    async fn classify(
        &self,
        query: String,
        candidate_labels: Vec<UrgencyLabel>,
    ) -> Result<Vec<ScoredLabel>, CoreError> {
        Ok(self.rank(&query, &candidate_labels))
    }
}
