//! Auditing observed calls and summarizing the outcomes.
pub mod audit;
pub mod summary;

pub use audit::{audit_call, audit_calls, ArgumentAudit, CallAudit, ObservedCall};
pub use summary::TypecheckSummary;
