use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use triage_core::domain::common::{
    ClassifierBackendKind, ClassifierConfig, LLMConfig, TriageConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "triage-api", version, about = "Symptom triage HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    /// Ask the model for JSON output instead of headed prose.
    #[arg(long, env = "LLM_STRUCTURED_OUTPUT", default_value_t = false, action = ArgAction::Set)]
    pub structured_output: bool,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub llm_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassifierBackendArg {
    Huggingface,
    Keyword,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClassifierArgs {
    #[arg(
        long = "classifier",
        env = "CLASSIFIER_BACKEND",
        value_enum,
        default_value_t = ClassifierBackendArg::Huggingface
    )]
    pub backend: ClassifierBackendArg,

    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    pub hf_api_token: Option<String>,

    #[arg(long, env = "HF_MODEL", default_value = "facebook/bart-large-mnli")]
    pub hf_model: String,

    #[arg(
        long,
        env = "HF_BASE_URL",
        default_value = "https://api-inference.huggingface.co"
    )]
    pub hf_base_url: String,

    #[arg(long, env = "CLASSIFIER_TIMEOUT_SECS", default_value_t = 30)]
    pub classifier_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<ClassifierBackendArg> for ClassifierBackendKind {
    fn from(value: ClassifierBackendArg) -> Self {
        match value {
            ClassifierBackendArg::Huggingface => ClassifierBackendKind::HuggingFace,
            ClassifierBackendArg::Keyword => ClassifierBackendKind::Keyword,
        }
    }
}

impl From<Args> for TriageConfig {
    fn from(args: Args) -> Self {
        TriageConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                structured_output: args.llm.structured_output,
                timeout: Duration::from_secs(args.llm.llm_timeout_secs),
            },
            classifier: ClassifierConfig {
                backend: args.classifier.backend.into(),
                huggingface_api_token: args.classifier.hf_api_token,
                huggingface_model: args.classifier.hf_model,
                huggingface_base_url: args.classifier.hf_base_url,
                timeout: Duration::from_secs(args.classifier.classifier_timeout_secs),
            },
        }
    }
}
