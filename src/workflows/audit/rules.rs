use chrono::NaiveDate;

use super::domain::{CaseAuditContext, CaseFlagSeverity, RecordStatus};
use super::guideline::GuidelineTable;

pub(crate) fn has_high_or_critical_flag(ctx: &CaseAuditContext) -> bool {
    ctx.open_flags.iter().any(|flag| {
        flag.is_open()
            && matches!(
                flag.severity,
                Some(CaseFlagSeverity::High | CaseFlagSeverity::Critical)
            )
    })
}

pub(crate) fn declined_with_risk(ctx: &CaseAuditContext) -> bool {
    if !ctx.client.cm_declined {
        return false;
    }

    ctx.open_flags.iter().filter(|flag| flag.is_open()).any(|flag| {
        let flag_type = flag.flag_type.to_lowercase();
        flag_type.contains("sdoh") || flag_type.contains("support")
    })
}

pub(crate) fn has_overdue_work(ctx: &CaseAuditContext, today: NaiveDate) -> bool {
    let followup_overdue = ctx
        .client
        .next_followup_due
        .map(|due| due < today)
        .unwrap_or(false);

    followup_overdue
        || ctx.tasks.iter().any(|task| {
            task.status == RecordStatus::Open && task.due_date.map(|due| due < today).unwrap_or(false)
        })
}

pub(crate) fn has_guideline_variance(ctx: &CaseAuditContext, guidelines: &GuidelineTable) -> bool {
    ctx.injuries
        .iter()
        .any(|injury| guidelines.is_variance(injury))
}
