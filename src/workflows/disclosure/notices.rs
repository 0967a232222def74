use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{FlagLevel, RiskFlag, SdohCategory};

const CLIENT_ACKNOWLEDGEMENT: &str = "Thank you for sharing this information. Your RN Care Manager will review and follow up to ensure you have the right support.";
const ATTORNEY_SAFETY_NOTE: &str = "Safety Review Initiated";

/// Acknowledgement shown to the client after submitting disclosures.
///
/// Deliberately identical for every tier so the client view never reveals
/// how a disclosure was classified.
pub fn client_facing_message(flags: &[RiskFlag]) -> Option<&'static str> {
    if flags.is_empty() {
        None
    } else {
        Some(CLIENT_ACKNOWLEDGEMENT)
    }
}

/// Note visible to the attorney; signals a review without any detail.
pub fn attorney_visible_note(flags: &[RiskFlag]) -> Option<&'static str> {
    flags
        .iter()
        .any(|flag| flag.level.is_high_or_critical())
        .then_some(ATTORNEY_SAFETY_NOTE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdohUpdate {
    pub flag: String,
    pub level: FlagLevel,
    pub detected_at: DateTime<Utc>,
}

/// Group SDOH-bearing flags by category for the caller's client record.
pub fn sdoh_updates(
    flags: &[RiskFlag],
    detected_at: DateTime<Utc>,
) -> BTreeMap<SdohCategory, Vec<SdohUpdate>> {
    let mut updates: BTreeMap<SdohCategory, Vec<SdohUpdate>> = BTreeMap::new();

    for flag in flags {
        if let (Some(category), Some(name)) = (flag.sdoh_category, &flag.sdoh_flag) {
            updates.entry(category).or_default().push(SdohUpdate {
                flag: name.clone(),
                level: flag.level,
                detected_at,
            });
        }
    }

    updates
}
