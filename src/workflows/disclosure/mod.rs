//! Intake disclosure classification.
//!
//! Selections from the sensitive-experiences section are matched against a
//! tiered vocabulary. High-tier items dominate: once any is present, the
//! moderate tier is not surfaced separately, while SDOH-only items are always
//! reported.

mod classifier;
pub mod domain;
mod notices;
mod vocabulary;

#[cfg(test)]
mod tests;

pub use classifier::{classify, Classification, DisclosureClassifier};
pub use domain::{
    AlertType, DisclosureScope, DisclosureSelection, FlagLevel, FlagSeverity,
    NotificationPriority, RiskFlag, SdohCategory, SdohMapping,
};
pub use notices::{attorney_visible_note, client_facing_message, sdoh_updates, SdohUpdate};
pub use vocabulary::{TriggerTables, VocabularyError};
