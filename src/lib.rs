//! Risk-signal classification and supervisor audit sampling for case management.
//!
//! Two engines live under [`workflows`]: the disclosure classifier, which turns a
//! client's sensitive-experience selections into [`RiskFlag`]s, and the audit
//! selector, which decides whether a case belongs in the priority review queue.
//! Both are pure functions of their inputs; callers own storage, notification,
//! and rendering.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use workflows::audit::{
    is_variance, sample, select_for_audit, AuditDecision, AuditPolicy, AuditReason,
    AuditSelector, CaseAuditContext, GuidelineTable, Injury, RollingHashSampler, Sampler,
};
pub use workflows::disclosure::{
    classify, DisclosureClassifier, DisclosureSelection, RiskFlag, TriggerTables,
};
