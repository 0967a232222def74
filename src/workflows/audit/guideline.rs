use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

/// One treated condition on a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    pub injury_type: String,
    #[serde(default)]
    pub weeks_since_injury: Option<f64>,
}

impl Injury {
    pub fn new(injury_type: impl Into<String>, weeks_since_injury: Option<f64>) -> Self {
        Self {
            injury_type: injury_type.into(),
            weeks_since_injury,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuidelineError {
    #[error("guideline table could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("guideline for '{injury_type}' must be a positive number of weeks, found {weeks}")]
    InvalidDuration { injury_type: String, weeks: f64 },
}

// Illustrative durations only; these are not payer or treatment criteria.
const ILLUSTRATIVE_WEEKS: &[(&str, f64)] = &[
    ("lumbar_strain", 6.0),
    ("cervical_strain", 8.0),
    ("whiplash", 8.0),
    ("concussion", 4.0),
    ("knee_sprain", 8.0),
    ("ankle_sprain", 6.0),
    ("shoulder_rotator_cuff", 12.0),
    ("carpal_tunnel", 8.0),
    ("upper_extremity_fracture", 10.0),
    ("lower_extremity_fracture", 12.0),
];

/// Reference recovery durations keyed by injury type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuidelineTable {
    weeks_by_type: BTreeMap<String, f64>,
}

impl GuidelineTable {
    pub fn illustrative() -> Self {
        Self {
            weeks_by_type: ILLUSTRATIVE_WEEKS
                .iter()
                .map(|(injury_type, weeks)| (injury_type.to_string(), *weeks))
                .collect(),
        }
    }

    pub fn new(weeks_by_type: BTreeMap<String, f64>) -> Result<Self, GuidelineError> {
        if let Some((injury_type, weeks)) = weeks_by_type
            .iter()
            .find(|(_, weeks)| !weeks.is_finite() || **weeks <= 0.0)
        {
            return Err(GuidelineError::InvalidDuration {
                injury_type: injury_type.clone(),
                weeks: *weeks,
            });
        }

        Ok(Self { weeks_by_type })
    }

    /// Load `{ "injury_type": weeks, ... }` JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GuidelineError> {
        let weeks_by_type: BTreeMap<String, f64> = serde_json::from_reader(reader)?;
        Self::new(weeks_by_type)
    }

    pub fn guideline_weeks(&self, injury_type: &str) -> Option<f64> {
        self.weeks_by_type.get(injury_type).copied()
    }

    /// Whether the injury has run strictly longer than its guideline.
    ///
    /// Advisory: the only consumer is the audit selector's documentation check.
    pub fn is_variance(&self, injury: &Injury) -> bool {
        let Some(weeks) = injury.weeks_since_injury.filter(|weeks| weeks.is_finite()) else {
            return false;
        };

        self.guideline_weeks(&injury.injury_type)
            .map(|guideline| weeks > guideline)
            .unwrap_or(false)
    }
}

impl Default for GuidelineTable {
    fn default() -> Self {
        Self::illustrative()
    }
}

pub fn is_variance(injury: &Injury, guidelines: &GuidelineTable) -> bool {
    guidelines.is_variance(injury)
}
