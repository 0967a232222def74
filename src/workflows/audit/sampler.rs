/// Deterministic pseudo-random source keyed by a stable identifier.
///
/// Implementations must return the same value in `[0, 1)` for the same input
/// on every call, in every process. Not suitable for anything security related.
pub trait Sampler {
    fn sample(&self, id: &str) -> f64;
}

pub const DEFAULT_SAMPLE_BUCKETS: u32 = 1000;

/// Rolling multiply-by-31 hash over UTF-16 code units, reduced into buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHashSampler {
    buckets: u32,
}

impl RollingHashSampler {
    pub fn new(buckets: u32) -> Self {
        let buckets = if buckets == 0 || buckets > i32::MAX as u32 {
            DEFAULT_SAMPLE_BUCKETS
        } else {
            buckets
        };
        Self { buckets }
    }

    pub fn buckets(&self) -> u32 {
        self.buckets
    }
}

impl Default for RollingHashSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_BUCKETS)
    }
}

impl Sampler for RollingHashSampler {
    fn sample(&self, id: &str) -> f64 {
        let accumulator = id.encode_utf16().fold(0i32, |acc, unit| {
            acc.wrapping_mul(31).wrapping_add(i32::from(unit))
        });
        let bucket = (accumulator % self.buckets as i32).unsigned_abs();
        f64::from(bucket) / f64::from(self.buckets)
    }
}

/// Sample with the default bucket count.
pub fn sample(id: &str) -> f64 {
    RollingHashSampler::default().sample(id)
}
