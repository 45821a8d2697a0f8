pub mod create_triage;
pub mod get_urgency_labels;
