use serde::Deserialize;
use serde_json::json;

/// Shape of the advice when the model is asked for JSON output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructuredAdvice {
    #[serde(default)]
    pub disease: String,
    #[serde(default)]
    pub foods: Vec<String>,
    #[serde(default)]
    pub medicines: Vec<String>,
}

/// Returns the JSON schema for triage advice LLM responses
pub fn get_triage_advice_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "disease": {
                "type": "string",
                "description": "Short statement of the most likely disease or condition"
            },
            "foods": {
                "type": "array",
                "items": { "type": "string" }
            },
            "medicines": {
                "type": "array",
                "items": { "type": "string" }
            },
            "disclaimer": { "type": "string" }
        },
        "required": ["disease", "foods", "medicines"]
    })
}
