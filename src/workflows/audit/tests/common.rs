use std::cell::Cell;

use chrono::NaiveDate;

use crate::workflows::audit::{
    CaseAuditContext, CaseFlag, CaseFlagSeverity, CaseTask, Injury, RecordStatus, Sampler,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 16).expect("valid date")
}

pub(super) fn days_from_today(days: i64) -> NaiveDate {
    today() + chrono::Duration::days(days)
}

pub(super) fn clean_context(id: &str) -> CaseAuditContext {
    CaseAuditContext {
        case_or_client_id: id.to_string(),
        ..CaseAuditContext::default()
    }
}

pub(super) fn flag(status: RecordStatus, severity: CaseFlagSeverity, flag_type: &str) -> CaseFlag {
    CaseFlag {
        status,
        severity: Some(severity),
        flag_type: flag_type.to_string(),
    }
}

pub(super) fn task(status: RecordStatus, due_in_days: Option<i64>) -> CaseTask {
    CaseTask {
        status,
        due_date: due_in_days.map(days_from_today),
    }
}

pub(super) fn injury(injury_type: &str, weeks: Option<f64>) -> Injury {
    Injury::new(injury_type, weeks)
}

/// Returns a fixed value and counts how often it was consulted.
pub(super) struct FixedSampler {
    value: f64,
    calls: Cell<usize>,
}

impl FixedSampler {
    pub(super) fn new(value: f64) -> Self {
        Self {
            value,
            calls: Cell::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Sampler for FixedSampler {
    fn sample(&self, _id: &str) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.value
    }
}
