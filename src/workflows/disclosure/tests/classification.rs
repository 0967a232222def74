use std::collections::BTreeMap;

use super::common::*;
use crate::workflows::disclosure::{
    classify, AlertType, DisclosureClassifier, DisclosureScope, FlagLevel, FlagSeverity,
    NotificationPriority, SdohCategory, SdohMapping, TriggerTables,
};

#[test]
fn current_alcohol_use_raises_high_behavioral_health_flag() {
    let flags = classify(&selection(&[CURRENT_ALCOHOL], &[], &[]));

    assert_eq!(flags.len(), 1);
    let flag = &flags[0];
    assert_eq!(flag.level, FlagLevel::High);
    assert_eq!(flag.alert_type, AlertType::SafetyConcern);
    assert_eq!(flag.severity, FlagSeverity::High);
    assert_eq!(flag.notification_priority, NotificationPriority::Within2h);
    assert_eq!(flag.disclosure_scope, DisclosureScope::Internal);
    assert_eq!(flag.sdoh_category, Some(SdohCategory::BehavioralHealth));
    assert_eq!(
        flag.sdoh_flag.as_deref(),
        Some("Behavioral Health Risk - Alcohol Use")
    );
    assert!(flag.message.contains(CURRENT_ALCOHOL));
}

#[test]
fn sentinel_answers_produce_no_flags() {
    assert!(classify(&selection(&[PREFER_NOT_TO_ANSWER], &[], &[])).is_empty());
    assert!(classify(&selection(&[], &[NOT_APPLICABLE], &[PREFER_NOT_TO_ANSWER])).is_empty());
}

#[test]
fn sentinel_match_is_exact_and_case_sensitive() {
    let classification = DisclosureClassifier::default()
        .classify_detailed(&selection(&["not applicable / n/a"], &[], &[]));

    assert!(classification.flags.is_empty());
    assert_eq!(classification.unrecognized, vec!["not applicable / n/a"]);
}

#[test]
fn skipped_section_overrides_every_selection() {
    let mut skipped = selection(&[CURRENT_ALCOHOL], &[STALKING], &[FOOD_INSECURITY]);
    skipped.section_skipped = true;

    let classification = DisclosureClassifier::default().classify_detailed(&skipped);
    assert!(classification.flags.is_empty());
    assert!(classification.unrecognized.is_empty());
}

#[test]
fn high_tier_suppresses_moderate_review_flags() {
    let flags = classify(&selection(
        &[PAST_SUBSTANCE],
        &[STALKING, WORKPLACE_BULLYING],
        &[],
    ));

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].alert_type, AlertType::SafetyConcern);
    assert!(flags
        .iter()
        .all(|flag| flag.alert_type != AlertType::SafetyReview));
}

#[test]
fn moderate_tier_surfaces_without_high_items() {
    let flags = classify(&selection(&[PAST_SUBSTANCE], &[WORKPLACE_BULLYING], &[]));

    assert_eq!(flags.len(), 2);
    for flag in &flags {
        assert_eq!(flag.level, FlagLevel::Moderate);
        assert_eq!(flag.alert_type, AlertType::SafetyReview);
        assert_eq!(flag.severity, FlagSeverity::Medium);
        assert_eq!(flag.notification_priority, NotificationPriority::Within24h);
    }
    assert_eq!(flags[0].sdoh_category, Some(SdohCategory::BehavioralHealth));
    assert_eq!(flags[1].sdoh_category, None);
}

#[test]
fn sdoh_only_items_are_reported_alongside_high_items() {
    let flags = classify(&selection(
        &[CURRENT_ALCOHOL],
        &[],
        &[FOOD_INSECURITY, LIMITED_SUPPORT],
    ));

    let sdoh: Vec<_> = flags
        .iter()
        .filter(|flag| flag.alert_type == AlertType::SdohConcern)
        .collect();
    assert_eq!(sdoh.len(), 2);
    assert_eq!(sdoh[0].sdoh_category, Some(SdohCategory::Economic));
    assert_eq!(sdoh[0].sdoh_flag.as_deref(), Some("Economic Insecurity - Food"));
    assert_eq!(sdoh[1].sdoh_category, Some(SdohCategory::SocialSupport));
    assert!(sdoh.iter().all(|flag| flag.level == FlagLevel::Moderate));
}

#[test]
fn suppressed_moderate_items_do_not_fall_through_to_sdoh() {
    let flags = classify(&selection(&[CURRENT_ALCOHOL, PAST_SUBSTANCE], &[], &[]));

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].alert_type, AlertType::SafetyConcern);
}

#[test]
fn flags_follow_selection_order() {
    let flags = classify(&selection(
        &[],
        &[],
        &[FOOD_INSECURITY, CURRENT_ALCOHOL, LIMITED_SUPPORT],
    ));

    let kinds: Vec<_> = flags.iter().map(|flag| flag.alert_type).collect();
    assert_eq!(
        kinds,
        vec![
            AlertType::SdohConcern,
            AlertType::SafetyConcern,
            AlertType::SdohConcern
        ]
    );
}

#[test]
fn repeated_labels_flag_once_per_occurrence() {
    let flags = classify(&selection(
        &[CURRENT_ALCOHOL],
        &[],
        &[FOOD_INSECURITY, FOOD_INSECURITY],
    ));

    let kinds: Vec<_> = flags.iter().map(|flag| flag.alert_type).collect();
    assert_eq!(
        kinds,
        vec![
            AlertType::SafetyConcern,
            AlertType::SdohConcern,
            AlertType::SdohConcern
        ]
    );

    let across_sections = classify(&selection(&[CURRENT_ALCOHOL], &[CURRENT_ALCOHOL], &[]));
    assert_eq!(across_sections.len(), 2);
}

#[test]
fn unknown_labels_are_dropped_and_reported() {
    let classifier = DisclosureClassifier::default();
    let classification = classifier.classify_detailed(&selection(
        &["Something the form added last week"],
        &[],
        &[FOOD_INSECURITY],
    ));

    assert_eq!(classification.flags.len(), 1);
    assert_eq!(
        classification.unrecognized,
        vec!["Something the form added last week".to_string()]
    );
}

#[test]
fn injected_vocabulary_drives_classification() {
    let mut sdoh = BTreeMap::new();
    sdoh.insert(
        "Transportation barriers".to_string(),
        SdohMapping {
            category: SdohCategory::Economic,
            flag: "Economic Insecurity - Transportation".to_string(),
        },
    );
    let tables = TriggerTables::new(
        vec!["Custom high".to_string()],
        vec!["Custom moderate".to_string()],
        sdoh,
    )
    .expect("valid vocabulary");
    let classifier = DisclosureClassifier::new(tables);

    let flags = classifier.classify(&selection(
        &["Custom moderate"],
        &[CURRENT_ALCOHOL],
        &["Transportation barriers"],
    ));

    assert_eq!(flags.len(), 2);
    assert_eq!(flags[0].alert_type, AlertType::SafetyReview);
    assert_eq!(flags[1].alert_type, AlertType::SdohConcern);
}
