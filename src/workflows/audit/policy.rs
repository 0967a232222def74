use serde::Serialize;

use super::sampler::DEFAULT_SAMPLE_BUCKETS;

pub const DEFAULT_RANDOM_SAMPLE_RATE: f64 = 0.15;

/// Policy dials for the priority review queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AuditPolicy {
    random_sample_rate: f64,
    sample_buckets: u32,
}

impl AuditPolicy {
    pub fn new(random_sample_rate: f64, sample_buckets: u32) -> Self {
        let random_sample_rate =
            if random_sample_rate.is_finite() && (0.0..=1.0).contains(&random_sample_rate) {
                random_sample_rate
            } else {
                DEFAULT_RANDOM_SAMPLE_RATE
            };
        let sample_buckets = if sample_buckets > 0 {
            sample_buckets
        } else {
            DEFAULT_SAMPLE_BUCKETS
        };

        Self {
            random_sample_rate,
            sample_buckets,
        }
    }

    /// Cases with a sample strictly below this rate are pulled for review.
    pub fn random_sample_rate(&self) -> f64 {
        self.random_sample_rate
    }

    pub fn sample_buckets(&self) -> u32 {
        self.sample_buckets
    }
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_SAMPLE_RATE, DEFAULT_SAMPLE_BUCKETS)
    }
}
