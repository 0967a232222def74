use serde::{Deserialize, Serialize};

/// Sensitive-experience answers captured during client intake.
///
/// Missing fields deserialize to their defaults so a partially populated
/// payload still classifies; an unset `section_skipped` means the client
/// answered the section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureSelection {
    pub substance_use: Vec<String>,
    pub safety_trauma: Vec<String>,
    pub stressors: Vec<String>,
    pub section_skipped: bool,
}

impl DisclosureSelection {
    /// Every selected label in section order. Repeats are kept; merging them
    /// is up to whoever stores the flags.
    pub fn labels(&self) -> Vec<&str> {
        self.substance_use
            .iter()
            .chain(&self.safety_trauma)
            .chain(&self.stressors)
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagLevel {
    Critical,
    High,
    Moderate,
    None,
}

impl FlagLevel {
    /// Marker used by the clinical dashboards for each tier.
    pub const fn color(self) -> Option<&'static str> {
        match self {
            Self::Critical => Some("🟥"),
            Self::High => Some("🟧"),
            Self::Moderate => Some("🟨"),
            Self::None => None,
        }
    }

    pub const fn is_high_or_critical(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    SafetyConcern,
    SafetyReview,
    SdohConcern,
}

impl AlertType {
    pub const fn code(self) -> &'static str {
        match self {
            Self::SafetyConcern => "safety_concern",
            Self::SafetyReview => "safety_review",
            Self::SdohConcern => "sdoh_concern",
        }
    }
}

/// Routing severity; coarser than [`FlagLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SdohCategory {
    Safety,
    Economic,
    BehavioralHealth,
    SocialSupport,
}

/// Who besides clinical staff may learn that a flag exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureScope {
    Internal,
    Minimal,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationPriority {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "within_2h")]
    Within2h,
    #[serde(rename = "within_24h")]
    Within24h,
}

/// SDOH category and canonical flag name attached to a disclosure item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdohMapping {
    pub category: SdohCategory,
    pub flag: String,
}

/// Classification output for a single disclosure item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    pub level: FlagLevel,
    pub alert_type: AlertType,
    pub message: String,
    pub severity: FlagSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdoh_category: Option<SdohCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdoh_flag: Option<String>,
    pub disclosure_scope: DisclosureScope,
    pub notification_priority: NotificationPriority,
}

impl RiskFlag {
    pub(crate) fn safety_concern(item: &str, sdoh: Option<&SdohMapping>) -> Self {
        Self {
            level: FlagLevel::High,
            alert_type: AlertType::SafetyConcern,
            message: format!("High priority safety concern: {item}"),
            severity: FlagSeverity::High,
            sdoh_category: sdoh.map(|mapping| mapping.category),
            sdoh_flag: sdoh.map(|mapping| mapping.flag.clone()),
            disclosure_scope: DisclosureScope::Internal,
            notification_priority: NotificationPriority::Within2h,
        }
    }

    pub(crate) fn safety_review(item: &str, sdoh: Option<&SdohMapping>) -> Self {
        Self {
            level: FlagLevel::Moderate,
            alert_type: AlertType::SafetyReview,
            message: format!("Moderate priority for review: {item}"),
            severity: FlagSeverity::Medium,
            sdoh_category: sdoh.map(|mapping| mapping.category),
            sdoh_flag: sdoh.map(|mapping| mapping.flag.clone()),
            disclosure_scope: DisclosureScope::Internal,
            notification_priority: NotificationPriority::Within24h,
        }
    }

    pub(crate) fn sdoh_concern(item: &str, sdoh: &SdohMapping) -> Self {
        Self {
            level: FlagLevel::Moderate,
            alert_type: AlertType::SdohConcern,
            message: format!("SDOH concern identified: {item}"),
            severity: FlagSeverity::Medium,
            sdoh_category: Some(sdoh.category),
            sdoh_flag: Some(sdoh.flag.clone()),
            disclosure_scope: DisclosureScope::Internal,
            notification_priority: NotificationPriority::Within24h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_concatenate_sections_keeping_repeats() {
        let selection = DisclosureSelection {
            substance_use: vec!["a".to_string(), "b".to_string()],
            safety_trauma: vec!["b".to_string(), "c".to_string()],
            stressors: vec!["a".to_string()],
            section_skipped: false,
        };

        assert_eq!(selection.labels(), vec!["a", "b", "b", "c", "a"]);
    }

    #[test]
    fn missing_skip_marker_defaults_to_answered() {
        let selection: DisclosureSelection =
            serde_json::from_str(r#"{"stressors": ["Food insecurity"]}"#).expect("parses");

        assert!(!selection.section_skipped);
        assert_eq!(selection.stressors, vec!["Food insecurity".to_string()]);
    }

    #[test]
    fn flag_levels_carry_dashboard_markers() {
        assert_eq!(FlagLevel::Critical.color(), Some("🟥"));
        assert_eq!(FlagLevel::High.color(), Some("🟧"));
        assert_eq!(FlagLevel::Moderate.color(), Some("🟨"));
        assert_eq!(FlagLevel::None.color(), None);
    }

    #[test]
    fn alert_codes_match_serialized_names() {
        for alert in [
            AlertType::SafetyConcern,
            AlertType::SafetyReview,
            AlertType::SdohConcern,
        ] {
            let json = serde_json::to_string(&alert).expect("serializes");
            assert_eq!(json, format!("\"{}\"", alert.code()));
        }
        assert_eq!(AlertType::SdohConcern.code(), "sdoh_concern");
    }

    #[test]
    fn notification_priority_uses_hour_codes_on_the_wire() {
        let json = serde_json::to_string(&NotificationPriority::Within2h).expect("serializes");
        assert_eq!(json, "\"within_2h\"");
    }
}
