use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct TriageConfig {
    pub llm: LLMConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub structured_output: bool,
    pub timeout: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassifierBackendKind {
    HuggingFace,
    Keyword,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub backend: ClassifierBackendKind,
    pub huggingface_api_token: Option<String>,
    pub huggingface_model: String,
    pub huggingface_base_url: String,
    pub timeout: Duration,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
