use chrono::NaiveDate;
use tracing::debug;

use super::domain::{AuditDecision, AuditReason, CaseAuditContext};
use super::guideline::GuidelineTable;
use super::policy::AuditPolicy;
use super::rules;
use super::sampler::{RollingHashSampler, Sampler};

/// Decides whether a case enters the supervisor's priority review queue.
///
/// Every substantive rule is evaluated so the decision lists all triggers.
/// The random sample only runs for cases none of them caught.
#[derive(Debug, Clone)]
pub struct AuditSelector<S = RollingHashSampler> {
    policy: AuditPolicy,
    guidelines: GuidelineTable,
    sampler: S,
}

impl AuditSelector<RollingHashSampler> {
    pub fn new(policy: AuditPolicy, guidelines: GuidelineTable) -> Self {
        let sampler = RollingHashSampler::new(policy.sample_buckets());
        Self::with_sampler(policy, guidelines, sampler)
    }
}

impl Default for AuditSelector<RollingHashSampler> {
    fn default() -> Self {
        Self::new(AuditPolicy::default(), GuidelineTable::default())
    }
}

impl<S: Sampler> AuditSelector<S> {
    pub fn with_sampler(policy: AuditPolicy, guidelines: GuidelineTable, sampler: S) -> Self {
        Self {
            policy,
            guidelines,
            sampler,
        }
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn select(&self, ctx: &CaseAuditContext, today: NaiveDate) -> AuditDecision {
        let mut reasons = Vec::new();

        if rules::has_high_or_critical_flag(ctx) {
            reasons.push(AuditReason::HighOrCriticalFlag);
        }
        if rules::declined_with_risk(ctx) {
            reasons.push(AuditReason::DeclinedWithRisk);
        }
        if rules::has_overdue_work(ctx, today) {
            reasons.push(AuditReason::OverdueWork);
        }
        if rules::has_guideline_variance(ctx, &self.guidelines) {
            reasons.push(AuditReason::GuidelineVariance);
        }

        let mut sample_value = None;
        if reasons.is_empty() {
            let value = self.sampler.sample(&ctx.case_or_client_id);
            if value < self.policy.random_sample_rate() {
                reasons.push(AuditReason::RandomSample);
            }
            sample_value = Some(value);
        }

        let decision = AuditDecision {
            is_priority_review: !reasons.is_empty(),
            reasons,
            sample_value,
        };

        debug!(
            priority_review = decision.is_priority_review,
            reasons = ?decision.reason_codes(),
            "audit selection evaluated"
        );

        decision
    }
}

/// Evaluate with the default policy and sampler against a caller-supplied table.
pub fn select_for_audit(
    ctx: &CaseAuditContext,
    guidelines: &GuidelineTable,
    today: NaiveDate,
) -> AuditDecision {
    AuditSelector::new(AuditPolicy::default(), guidelines.clone()).select(ctx, today)
}
