pub mod common;
pub mod triage;
