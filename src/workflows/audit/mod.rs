//! Supervisor priority-review selection.
//!
//! Rule triggers (open high/critical flags, declined care management with
//! social risk, overdue work, guideline variance) are unioned; cases with no
//! trigger fall through to a deterministic baseline sample keyed by the case
//! identifier so re-running the audit reproduces the same queue.

pub mod domain;
pub mod export;
mod guideline;
mod policy;
mod rules;
mod sampler;
mod selector;

#[cfg(test)]
mod tests;

pub use domain::{
    AuditDecision, AuditReason, CaseAuditContext, CaseFlag, CaseFlagSeverity, CaseTask,
    ClientSnapshot, RecordStatus,
};
pub use export::{write_audit_csv, ExportError};
pub use guideline::{is_variance, GuidelineError, GuidelineTable, Injury};
pub use policy::{AuditPolicy, DEFAULT_RANDOM_SAMPLE_RATE};
pub use sampler::{sample, RollingHashSampler, Sampler, DEFAULT_SAMPLE_BUCKETS};
pub use selector::{select_for_audit, AuditSelector};
