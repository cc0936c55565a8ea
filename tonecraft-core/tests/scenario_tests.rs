//! End-to-end scenario tests for the formulation pipeline

use tonecraft_core::{
    plan_sessions, recommend, FormulationRequest, HairCondition, HairProfile, ToneSpecification,
};

fn request(start: u8, target: u8, porosity: u8) -> FormulationRequest {
    FormulationRequest {
        profile: HairProfile {
            starting_level: start,
            target_level: target,
            porosity,
        },
        condition: HairCondition::default(),
        start_tone: None,
        target_tone: None,
    }
}

#[test]
fn test_four_level_lift_single_session() {
    let request = request(4, 8, 5);

    let recommendation = recommend(&request).unwrap();
    assert_eq!(recommendation.developer_volume, 40);
    assert_eq!(recommendation.undertone, "Orange/Gold");
    assert!(recommendation.toner.recommended);
    assert_eq!(
        recommendation.toner.toner_type.as_deref(),
        Some("Blue/Violet-based")
    );
    assert_eq!(recommendation.phases.toning, Some(20));

    let plan = plan_sessions(&request).unwrap();
    assert_eq!(plan.number_of_sessions, 1);
    let levels: Vec<u8> = plan.sessions.iter().map(|s| s.stage_level).collect();
    assert_eq!(levels, vec![5, 6, 7, 8]);
    let last = plan.sessions.last().unwrap();
    assert_eq!(last.undertone, "Orange/Gold");
    assert_eq!(last.phases.toning, Some(20));
}

#[test]
fn test_high_porosity_reduces_developer() {
    let recommendation = recommend(&request(4, 8, 9)).unwrap();
    assert_eq!(recommendation.developer_volume, 30);
    assert!(recommendation
        .warnings
        .iter()
        .any(|w| w.contains("High porosity")));
}

#[test]
fn test_seven_level_lift_splits_into_sessions() {
    let plan = plan_sessions(&request(2, 9, 5)).unwrap();
    assert_eq!(plan.number_of_sessions, 2);
    assert_eq!(plan.days_between_sessions, Some(14));

    // First session is capped at a 4-level lift: 2 -> 6
    let levels: Vec<u8> = plan.sessions.iter().map(|s| s.stage_level).collect();
    assert_eq!(levels, vec![3, 4, 5, 6]);

    let aggregate = &plan.warnings[0];
    assert!(aggregate.contains("2 sessions"));
    assert!(aggregate.contains("14 days"));
}

#[test]
fn test_volume_rule_overrides_tone_family_ratio() {
    let mut request = request(4, 8, 5);
    request.start_tone = Some(ToneSpecification::new("Ash Black", 5));
    request.target_tone = Some(ToneSpecification::new("Copper Black", 5));

    let recommendation = recommend(&request).unwrap();
    // warm-intense target would give 1:1.5, but 40 volume forces 1:2
    assert_eq!(recommendation.developer_volume, 40);
    assert_eq!(recommendation.mixing_ratio, "1:2");
    assert!(recommendation
        .considerations
        .iter()
        .any(|c| c.contains("Tone family change")));
}

#[test]
fn test_deep_darkening_considerations() {
    let recommendation = recommend(&request(8, 3, 5)).unwrap();
    assert!(recommendation
        .considerations
        .iter()
        .any(|c| c.contains("color fill")));
    assert!(recommendation
        .considerations
        .iter()
        .any(|c| c.contains("sessions")));
    assert!(recommendation
        .considerations
        .iter()
        .any(|c| c.contains("bond builder")));
}

#[test]
fn test_zero_difference_returns_baseline() {
    let recommendation = recommend(&request(5, 5, 5)).unwrap();
    assert_eq!(recommendation.developer_volume, 20);
    assert_eq!(recommendation.processing_time_minutes, 30);
    assert!(recommendation
        .warnings
        .iter()
        .any(|w| w.contains("No level change")));
}

#[test]
fn test_missing_tones_leave_tone_fields_absent() {
    let recommendation = recommend(&request(6, 4, 5)).unwrap();
    // No tone supplied: ratio falls back to the volume rule, no family notes
    assert_eq!(recommendation.mixing_ratio, "1:2");
    assert!(!recommendation
        .considerations
        .iter()
        .any(|c| c.contains("Tone family")));
}

#[test]
fn test_out_of_range_input_fails_without_partial_result() {
    assert!(recommend(&request(0, 8, 5)).is_err());
    assert!(recommend(&request(4, 11, 5)).is_err());
    assert!(recommend(&request(4, 8, 0)).is_err());
    assert!(recommend(&request(4, 8, 11)).is_err());
}
