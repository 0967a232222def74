use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{DisclosureSelection, RiskFlag};
use super::vocabulary::TriggerTables;

/// Flags produced for a selection along with labels no table recognised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub flags: Vec<RiskFlag>,
    pub unrecognized: Vec<String>,
}

/// Stateless classifier applying a trigger vocabulary to intake selections.
#[derive(Debug, Clone, Default)]
pub struct DisclosureClassifier {
    tables: TriggerTables,
}

impl DisclosureClassifier {
    pub fn new(tables: TriggerTables) -> Self {
        Self { tables }
    }

    pub fn classify(&self, selection: &DisclosureSelection) -> Vec<RiskFlag> {
        self.classify_detailed(selection).flags
    }

    /// Classify and also report labels outside the vocabulary so callers can
    /// watch for intake-form drift. Unrecognised labels never produce flags.
    pub fn classify_detailed(&self, selection: &DisclosureSelection) -> Classification {
        if selection.section_skipped {
            return Classification::default();
        }

        let items: Vec<&str> = selection
            .labels()
            .into_iter()
            .filter(|item| !self.tables.is_sentinel(item))
            .collect();

        if items.is_empty() {
            return Classification::default();
        }

        let has_critical = items.iter().any(|item| self.tables.is_critical(item));
        let has_high = items.iter().any(|item| self.tables.is_high(item));
        let escalated = has_high || has_critical;

        let mut classification = Classification::default();
        for item in items {
            let sdoh = self.tables.sdoh_mapping(item);

            if self.tables.is_high(item) {
                classification
                    .flags
                    .push(RiskFlag::safety_concern(item, sdoh));
            } else if self.tables.is_moderate(item) {
                // Moderate items are folded into the high-tier review once a case escalates.
                if !escalated {
                    classification
                        .flags
                        .push(RiskFlag::safety_review(item, sdoh));
                }
            } else if let Some(mapping) = sdoh {
                classification
                    .flags
                    .push(RiskFlag::sdoh_concern(item, mapping));
            } else if !self.tables.is_critical(item) {
                classification.unrecognized.push(item.to_string());
            }
        }

        debug!(
            flags = classification.flags.len(),
            unrecognized = classification.unrecognized.len(),
            escalated,
            "classified disclosure selection"
        );

        classification
    }
}

/// Classify with the standard intake vocabulary.
pub fn classify(selection: &DisclosureSelection) -> Vec<RiskFlag> {
    DisclosureClassifier::default().classify(selection)
}
