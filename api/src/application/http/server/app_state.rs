use std::sync::Arc;

use triage_core::application::SymptomTriageService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SymptomTriageService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SymptomTriageService) -> Self {
        Self { args, service }
    }
}
