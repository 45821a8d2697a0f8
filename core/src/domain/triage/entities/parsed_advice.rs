use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shown in place of a condition when the response has no usable Disease section.
pub const DISEASE_FALLBACK: &str = "No disease prediction available.";

/// Display-ready sections extracted from the advice text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParsedAdvice {
    pub disease: String,
    pub foods: Vec<String>,
    pub medicines: Vec<String>,
}

impl ParsedAdvice {
    pub fn new(disease: Option<String>, foods: Vec<String>, medicines: Vec<String>) -> Self {
        let disease = disease
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DISEASE_FALLBACK.to_string());

        Self {
            disease,
            foods,
            medicines,
        }
    }
}

impl Default for ParsedAdvice {
    fn default() -> Self {
        Self::new(None, Vec::new(), Vec::new())
    }
}
