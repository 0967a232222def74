use std::env;
use std::fmt;

use crate::workflows::audit::{AuditPolicy, DEFAULT_RANDOM_SAMPLE_RATE, DEFAULT_SAMPLE_BUCKETS};

/// Distinguishes runtime behavior for different deployment stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the engine binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub audit: AuditConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let random_sample_rate = match env::var("AUDIT_SAMPLE_RATE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|rate| rate.is_finite() && (0.0..=1.0).contains(rate))
                .ok_or(ConfigError::InvalidSampleRate(raw))?,
            Err(_) => DEFAULT_RANDOM_SAMPLE_RATE,
        };

        let sample_buckets = match env::var("AUDIT_SAMPLE_BUCKETS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|buckets| *buckets > 0 && *buckets <= i32::MAX as u32)
                .ok_or(ConfigError::InvalidSampleBuckets(raw))?,
            Err(_) => DEFAULT_SAMPLE_BUCKETS,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            audit: AuditConfig {
                random_sample_rate,
                sample_buckets,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Priority review sampling settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditConfig {
    pub random_sample_rate: f64,
    pub sample_buckets: u32,
}

impl AuditConfig {
    pub fn policy(&self) -> AuditPolicy {
        AuditPolicy::new(self.random_sample_rate, self.sample_buckets)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSampleRate(String),
    InvalidSampleBuckets(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSampleRate(raw) => {
                write!(f, "AUDIT_SAMPLE_RATE must be a number between 0 and 1, found '{raw}'")
            }
            ConfigError::InvalidSampleBuckets(raw) => {
                write!(f, "AUDIT_SAMPLE_BUCKETS must be a positive 32-bit integer, found '{raw}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
