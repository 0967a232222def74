use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::domain::{SdohCategory, SdohMapping};

const NONE_OF_THE_ABOVE: &str = "None of the above / prefer not to answer";
const NOT_APPLICABLE: &str = "Not Applicable / N/A";

// Critical signals (self-harm, suicidal ideation) arrive through the
// behavioral-health channel and are never synthesized from this vocabulary.
const CRITICAL_TRIGGERS: &[&str] = &[];

const HIGH_TRIGGERS: &[&str] = &[
    "History of domestic violence or intimate-partner violence",
    "Current safety concerns at home or in a relationship",
    "Stalking or harassment experience",
    "History of sexual abuse or assault",
    "Experience of trafficking or exploitation",
    "Current use of non-prescribed or illicit substances",
    "Current alcohol use that concerns you",
    "Current prescription medication misuse or dependency",
];

const MODERATE_TRIGGERS: &[&str] = &[
    "History of physical abuse (childhood or adulthood)",
    "History of emotional or psychological abuse",
    "History of bullying or workplace harassment",
    "Witnessed violence (home, community, or workplace)",
    "Past use of non-prescribed or illicit substances",
    "Past alcohol use that required treatment or caused problems",
    "Past prescription medication misuse or dependency",
];

const SDOH_MAPPINGS: &[(&str, SdohCategory, &str)] = &[
    (
        "History of domestic violence or intimate-partner violence",
        SdohCategory::Safety,
        "Safety Concern - Domestic Violence",
    ),
    (
        "Current safety concerns at home or in a relationship",
        SdohCategory::Safety,
        "Safety Concern - Current Unsafe Environment",
    ),
    (
        "Stalking or harassment experience",
        SdohCategory::Safety,
        "Safety Concern - Stalking/Harassment",
    ),
    (
        "History of sexual abuse or assault",
        SdohCategory::Safety,
        "Safety Concern - Sexual Trauma",
    ),
    (
        "Experience of trafficking or exploitation",
        SdohCategory::Safety,
        "Safety Concern - Trafficking/Exploitation",
    ),
    (
        "Housing instability or homelessness risk",
        SdohCategory::Economic,
        "Economic Insecurity - Housing",
    ),
    (
        "Food insecurity",
        SdohCategory::Economic,
        "Economic Insecurity - Food",
    ),
    (
        "Financial hardship or loss of income",
        SdohCategory::Economic,
        "Economic Insecurity - Financial",
    ),
    (
        "Current use of non-prescribed or illicit substances",
        SdohCategory::BehavioralHealth,
        "Behavioral Health Risk - Active Substance Use",
    ),
    (
        "Current alcohol use that concerns you",
        SdohCategory::BehavioralHealth,
        "Behavioral Health Risk - Alcohol Use",
    ),
    (
        "Current prescription medication misuse or dependency",
        SdohCategory::BehavioralHealth,
        "Behavioral Health Risk - Medication Misuse",
    ),
    (
        "Past use of non-prescribed or illicit substances",
        SdohCategory::BehavioralHealth,
        "Behavioral Health Risk - Past Substance Use",
    ),
    (
        "Past alcohol use that required treatment or caused problems",
        SdohCategory::BehavioralHealth,
        "Behavioral Health Risk - Past Alcohol Use",
    ),
    (
        "Past prescription medication misuse or dependency",
        SdohCategory::BehavioralHealth,
        "Behavioral Health Risk - Past Medication Misuse",
    ),
    (
        "Limited family or social support",
        SdohCategory::SocialSupport,
        "Social Support Need - Limited Network",
    ),
];

/// Errors raised while loading a replacement vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("vocabulary could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("critical triggers are sourced from the behavioral-health channel, found {0} in vocabulary")]
    CriticalTriggersNotSupported(usize),
    #[error("'{0}' is listed as both a high and a moderate trigger")]
    OverlappingTiers(String),
}

/// Read-only classification vocabulary injected into the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerTables {
    #[serde(default)]
    critical: Vec<String>,
    high: Vec<String>,
    moderate: Vec<String>,
    #[serde(default)]
    sdoh: BTreeMap<String, SdohMapping>,
    #[serde(default = "default_sentinels")]
    no_disclosure_sentinels: Vec<String>,
}

fn default_sentinels() -> Vec<String> {
    vec![NONE_OF_THE_ABOVE.to_string(), NOT_APPLICABLE.to_string()]
}

impl TriggerTables {
    /// Production intake vocabulary.
    pub fn standard() -> Self {
        Self {
            critical: CRITICAL_TRIGGERS.iter().map(|item| item.to_string()).collect(),
            high: HIGH_TRIGGERS.iter().map(|item| item.to_string()).collect(),
            moderate: MODERATE_TRIGGERS.iter().map(|item| item.to_string()).collect(),
            sdoh: SDOH_MAPPINGS
                .iter()
                .map(|(item, category, flag)| {
                    (
                        item.to_string(),
                        SdohMapping {
                            category: *category,
                            flag: flag.to_string(),
                        },
                    )
                })
                .collect(),
            no_disclosure_sentinels: default_sentinels(),
        }
    }

    /// Build a vocabulary from explicit tiers; the critical tier is always empty.
    pub fn new(
        high: Vec<String>,
        moderate: Vec<String>,
        sdoh: BTreeMap<String, SdohMapping>,
    ) -> Result<Self, VocabularyError> {
        Self {
            critical: Vec::new(),
            high,
            moderate,
            sdoh,
            no_disclosure_sentinels: default_sentinels(),
        }
        .validated()
    }

    /// Load a vocabulary from JSON, e.g. a site-specific intake form.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, VocabularyError> {
        let tables: Self = serde_json::from_reader(reader)?;
        tables.validated()
    }

    fn validated(self) -> Result<Self, VocabularyError> {
        if !self.critical.is_empty() {
            return Err(VocabularyError::CriticalTriggersNotSupported(
                self.critical.len(),
            ));
        }

        if let Some(overlap) = self.high.iter().find(|item| self.moderate.contains(item)) {
            return Err(VocabularyError::OverlappingTiers(overlap.clone()));
        }

        Ok(self)
    }

    pub fn is_sentinel(&self, item: &str) -> bool {
        self.no_disclosure_sentinels.iter().any(|s| s == item)
    }

    pub fn is_critical(&self, item: &str) -> bool {
        self.critical.iter().any(|trigger| trigger == item)
    }

    pub fn is_high(&self, item: &str) -> bool {
        self.high.iter().any(|trigger| trigger == item)
    }

    pub fn is_moderate(&self, item: &str) -> bool {
        self.moderate.iter().any(|trigger| trigger == item)
    }

    pub fn sdoh_mapping(&self, item: &str) -> Option<&SdohMapping> {
        self.sdoh.get(item)
    }
}

impl Default for TriggerTables {
    fn default() -> Self {
        Self::standard()
    }
}
