use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::guideline::Injury;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseFlagSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Flag record on the case as stored by the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFlag {
    pub status: RecordStatus,
    #[serde(default)]
    pub severity: Option<CaseFlagSeverity>,
    #[serde(rename = "type", default)]
    pub flag_type: String,
}

impl CaseFlag {
    pub fn is_open(&self) -> bool {
        self.status == RecordStatus::Open
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTask {
    pub status: RecordStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSnapshot {
    pub cm_declined: bool,
    pub next_followup_due: Option<NaiveDate>,
    pub last_followup_date: Option<NaiveDate>,
}

/// Aggregate case state assembled by the caller for audit selection.
///
/// `case_or_client_id` seeds the sampler and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseAuditContext {
    pub open_flags: Vec<CaseFlag>,
    pub tasks: Vec<CaseTask>,
    pub client: ClientSnapshot,
    pub injuries: Vec<Injury>,
    pub case_or_client_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditReason {
    HighOrCriticalFlag,
    DeclinedWithRisk,
    OverdueWork,
    GuidelineVariance,
    RandomSample,
}

impl AuditReason {
    pub const fn code(self) -> &'static str {
        match self {
            Self::HighOrCriticalFlag => "high_or_critical_flag",
            Self::DeclinedWithRisk => "declined_with_risk",
            Self::OverdueWork => "overdue_work",
            Self::GuidelineVariance => "guideline_variance",
            Self::RandomSample => "random_sample",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::HighOrCriticalFlag => "open high or critical flag",
            Self::DeclinedWithRisk => "care management declined with SDOH or support risk",
            Self::OverdueWork => "overdue follow-up or task",
            Self::GuidelineVariance => {
                "recovery beyond guideline duration; confirm clinical justification is documented"
            }
            Self::RandomSample => "baseline random sample",
        }
    }
}

/// Priority-review outcome with the rules that fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDecision {
    pub is_priority_review: bool,
    pub reasons: Vec<AuditReason>,
    /// Computed only when no substantive rule fired. For audit trails, not for
    /// display to the sampled client.
    pub sample_value: Option<f64>,
}

impl AuditDecision {
    pub fn summary(&self) -> String {
        if !self.is_priority_review {
            return "not selected for priority review".to_string();
        }

        let reasons: Vec<&str> = self
            .reasons
            .iter()
            .map(|reason| reason.description())
            .collect();
        format!("priority review: {}", reasons.join("; "))
    }

    pub fn reason_codes(&self) -> Vec<&'static str> {
        self.reasons.iter().map(|reason| reason.code()).collect()
    }
}
