use crate::workflows::disclosure::DisclosureSelection;

pub(super) const CURRENT_ALCOHOL: &str = "Current alcohol use that concerns you";
pub(super) const STALKING: &str = "Stalking or harassment experience";
pub(super) const PAST_SUBSTANCE: &str = "Past use of non-prescribed or illicit substances";
pub(super) const WORKPLACE_BULLYING: &str = "History of bullying or workplace harassment";
pub(super) const FOOD_INSECURITY: &str = "Food insecurity";
pub(super) const LIMITED_SUPPORT: &str = "Limited family or social support";
pub(super) const PREFER_NOT_TO_ANSWER: &str = "None of the above / prefer not to answer";
pub(super) const NOT_APPLICABLE: &str = "Not Applicable / N/A";

pub(super) fn selection(
    substance_use: &[&str],
    safety_trauma: &[&str],
    stressors: &[&str],
) -> DisclosureSelection {
    DisclosureSelection {
        substance_use: substance_use.iter().map(|item| item.to_string()).collect(),
        safety_trauma: safety_trauma.iter().map(|item| item.to_string()).collect(),
        stressors: stressors.iter().map(|item| item.to_string()).collect(),
        section_skipped: false,
    }
}
