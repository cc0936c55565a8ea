//! Engine invariants over the full valid input domain

use tonecraft_core::{
    plan_sessions, recommend, render_json, FormulationRequest, HairCondition, HairProfile,
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
fn test_volume_domain_over_all_levels() {
    for start in 1..=10u8 {
        for target in 1..=10u8 {
            for porosity in [1u8, 5, 10] {
                let recommendation = recommend(&request(start, target, porosity)).unwrap();
                assert!(
                    [10, 20, 30, 40].contains(&recommendation.developer_volume),
                    "volume {} out of domain for ({}, {}, {})",
                    recommendation.developer_volume,
                    start,
                    target,
                    porosity
                );
            }
        }
    }
}

#[test]
fn test_base_volume_banding() {
    // porosity 5 and default condition: no adjustments apply
    assert_eq!(recommend(&request(5, 5, 5)).unwrap().developer_volume, 20);
    assert_eq!(recommend(&request(5, 6, 5)).unwrap().developer_volume, 20);
    assert_eq!(recommend(&request(5, 7, 5)).unwrap().developer_volume, 30);
    assert_eq!(recommend(&request(5, 8, 5)).unwrap().developer_volume, 40);
    assert_eq!(recommend(&request(4, 8, 5)).unwrap().developer_volume, 40);
    assert_eq!(recommend(&request(2, 9, 5)).unwrap().developer_volume, 40);
}

#[test]
fn test_processing_floor_over_all_inputs() {
    for start in 1..=10u8 {
        for target in 1..=10u8 {
            for porosity in 1..=10u8 {
                let recommendation = recommend(&request(start, target, porosity)).unwrap();
                assert!(
                    recommendation.processing_time_minutes >= 15,
                    "time {} below floor for ({}, {}, {})",
                    recommendation.processing_time_minutes,
                    start,
                    target,
                    porosity
                );
            }
        }
    }
}

#[test]
fn test_idempotent_byte_identical_output() {
    let request = request(3, 8, 6);

    let first = render_json(&recommend(&request).unwrap());
    let second = render_json(&recommend(&request).unwrap());
    assert_eq!(first, second, "recommendation must be byte-for-byte identical");

    let first_plan = render_json(&plan_sessions(&request).unwrap());
    let second_plan = render_json(&plan_sessions(&request).unwrap());
    assert_eq!(first_plan, second_plan, "plan must be byte-for-byte identical");
}

#[test]
fn test_undertone_table_through_pipeline() {
    assert_eq!(recommend(&request(4, 2, 5)).unwrap().undertone, "Blue/Black");
    assert_eq!(recommend(&request(4, 5, 5)).unwrap().undertone, "Red/Copper");
    assert_eq!(recommend(&request(4, 9, 5)).unwrap().undertone, "Yellow");
}

#[test]
fn test_toner_iff_warm_undertone() {
    for target in 1..=10u8 {
        let recommendation = recommend(&request(5, target, 5)).unwrap();
        let warm = matches!(recommendation.undertone.as_str(), "Orange/Gold" | "Yellow");
        assert_eq!(
            recommendation.toner.recommended, warm,
            "toner mismatch at target level {}",
            target
        );
        assert_eq!(recommendation.phases.toning.is_some(), warm);
    }
}

#[test]
fn test_session_count_ceiling() {
    for target in 1..=10u8 {
        let req = request(1, target, 5);
        let diff = req.profile.level_difference();
        let plan = plan_sessions(&req).unwrap();
        let expected = if diff > 4 { u32::from(diff.div_ceil(4)) } else { 1 };
        assert_eq!(plan.number_of_sessions, expected, "diff {}", diff);
        assert_eq!(plan.days_between_sessions.is_some(), expected > 1);
    }
}

#[test]
fn test_headline_time_is_processing_phase() {
    for target in 2..=9u8 {
        let recommendation = recommend(&request(1, target, 5)).unwrap();
        assert_eq!(
            recommendation.processing_time_minutes,
            recommendation.phases.processing
        );
    }
}
