use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::audit::{ExportError, GuidelineError};
use crate::workflows::disclosure::VocabularyError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Input(serde_json::Error),
    Vocabulary(VocabularyError),
    Guideline(GuidelineError),
    Export(ExportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Input(err) => write!(f, "invalid input: {}", err),
            AppError::Vocabulary(err) => write!(f, "vocabulary error: {}", err),
            AppError::Guideline(err) => write!(f, "guideline error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Vocabulary(err) => Some(err),
            AppError::Guideline(err) => Some(err),
            AppError::Export(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}

impl From<VocabularyError> for AppError {
    fn from(value: VocabularyError) -> Self {
        Self::Vocabulary(value)
    }
}

impl From<GuidelineError> for AppError {
    fn from(value: GuidelineError) -> Self {
        Self::Guideline(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}
