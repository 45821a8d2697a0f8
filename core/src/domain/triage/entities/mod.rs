pub mod parsed_advice;
pub mod triage_report;
pub mod urgency;

pub use parsed_advice::*;
pub use triage_report::*;
pub use urgency::*;
