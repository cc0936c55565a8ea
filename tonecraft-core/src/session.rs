//! Session planning
//!
//! Steps the journey one level at a time, reusing the developer, timing,
//! tone, and mixing stages per step.
//!
//! Global invariants enforced:
//! - A single session never lifts more than the configured cap
//! - Only the first session's stages are materialized; callers re-invoke
//!   after each completed session
//! - Stage order follows the journey direction, deterministic

use crate::config::ResolvedConfig;
use crate::developer::advise_developer;
use crate::lift::classify_lift;
use crate::mixing::select_ratio;
use crate::profile::{FormulationRequest, HairProfile};
use crate::report::{Session, SessionPlan};
use crate::timing::estimate_processing;
use crate::tone::{advise_toner, analyze_transition, Undertone};
use anyhow::Result;

/// Build the session plan for a requested change.
///
/// A difference within the per-session cap yields one session with a
/// stage per unit step. Beyond the cap the journey splits into
/// `ceil(difference / cap)` sessions spaced by the cooldown interval,
/// and only the first session's stages are computed.
pub fn plan_sessions(request: &FormulationRequest, config: &ResolvedConfig) -> Result<SessionPlan> {
    request.validate()?;
    let profile = &request.profile;
    let lift = classify_lift(profile)?;
    let diff = lift.level_difference;
    let cap = config.max_lift_per_session;

    let number_of_sessions = u32::from(if diff > cap { diff.div_ceil(cap) } else { 1 });
    let transition = request
        .tones()
        .map(|(start, target)| analyze_transition(start, target));

    let step: i16 = if profile.is_darkening() { -1 } else { 1 };
    let stage_count = diff.min(cap).max(1);

    let mut sessions = Vec::with_capacity(usize::from(stage_count));
    let mut previous_level = profile.starting_level;

    for stage_index in 0..stage_count {
        let stage_level = if diff == 0 {
            profile.starting_level
        } else {
            (i16::from(previous_level) + step) as u8
        };
        let is_final_stage = stage_index == stage_count - 1;

        let stage_profile = HairProfile {
            starting_level: previous_level,
            target_level: stage_level,
            porosity: profile.porosity,
        };
        let stage_lift = classify_lift(&stage_profile)?;
        let advice = advise_developer(&stage_lift, &stage_profile, &request.condition, config);
        let undertone = Undertone::for_level(stage_level);

        // The tone-cross penalty lands where the target tone is applied
        let cross_penalty = if is_final_stage {
            transition.map_or(0, |t| t.cross_penalty_minutes)
        } else {
            0
        };
        let mut estimate = estimate_processing(
            &stage_profile,
            &request.condition,
            &stage_lift,
            cross_penalty,
            undertone,
            config,
        );
        // Toning belongs to the final stage of the session only
        if !is_final_stage {
            estimate.phases.toning = None;
        }

        let ratio = select_ratio(advice.volume, transition.as_ref());
        let toner = advise_toner(undertone);

        let mut recommendations = vec![format!(
            "Apply {} volume developer mixed {}",
            advice.volume.volume(),
            ratio.as_str()
        )];
        recommendations.extend(advice.reasoning.iter().cloned());
        if is_final_stage && toner.recommended {
            if let Some(toner_type) = &toner.toner_type {
                recommendations.push(format!("Finish with a {} toner", toner_type));
            }
        }

        let mut stage_warnings = advice.warnings;
        stage_warnings.extend(estimate.warnings.iter().cloned());

        sessions.push(Session {
            stage_level,
            undertone: undertone.as_str().to_string(),
            time_required_minutes: estimate.phases.total(),
            recommendations,
            warnings: stage_warnings,
            phases: estimate.phases,
        });
        previous_level = stage_level;
    }

    let total_time_minutes = sessions.iter().map(|s| s.time_required_minutes).sum();

    let mut warnings = Vec::new();
    if number_of_sessions > 1 {
        warnings.push(format!(
            "Reaching level {} safely requires {} sessions spaced {} days apart; this plan covers the first session only",
            profile.target_level, number_of_sessions, config.days_between_sessions
        ));
    }

    Ok(SessionPlan {
        sessions,
        total_time_minutes,
        warnings,
        number_of_sessions,
        days_between_sessions: (number_of_sessions > 1).then_some(config.days_between_sessions),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{HairCondition, ToneSpecification};

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

    fn plan(start: u8, target: u8, porosity: u8) -> SessionPlan {
        let config = ResolvedConfig::defaults().unwrap();
        plan_sessions(&request(start, target, porosity), &config).unwrap()
    }

    #[test]
    fn test_single_session_stage_walk() {
        let plan = plan(4, 8, 5);
        assert_eq!(plan.number_of_sessions, 1);
        assert_eq!(plan.days_between_sessions, None);
        let levels: Vec<u8> = plan.sessions.iter().map(|s| s.stage_level).collect();
        assert_eq!(levels, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_darkening_steps_downward() {
        let plan = plan(6, 3, 5);
        let levels: Vec<u8> = plan.sessions.iter().map(|s| s.stage_level).collect();
        assert_eq!(levels, vec![5, 4, 3]);
    }

    #[test]
    fn test_multi_session_split() {
        // 7-level lift: ceil(7/4) = 2 sessions, first capped at 4 levels
        let plan = plan(2, 9, 5);
        assert_eq!(plan.number_of_sessions, 2);
        assert_eq!(plan.days_between_sessions, Some(14));
        let levels: Vec<u8> = plan.sessions.iter().map(|s| s.stage_level).collect();
        assert_eq!(levels, vec![3, 4, 5, 6]);
        assert!(plan.warnings[0].contains("2 sessions"));
        assert!(plan.warnings[0].contains("14 days"));
    }

    #[test]
    fn test_toning_only_on_final_stage() {
        // Stages 5..8: levels 7 and 8 expose Orange/Gold, but only the
        // final stage carries a toning phase
        let plan = plan(4, 8, 5);
        let toned: Vec<bool> = plan
            .sessions
            .iter()
            .map(|s| s.phases.toning.is_some())
            .collect();
        assert_eq!(toned, vec![false, false, false, true]);
    }

    #[test]
    fn test_total_time_formula() {
        // Four stages at porosity 5: each processing = 30, application = 15,
        // final stage adds 20 toning: 4 * 45 + 20 = 200
        let plan = plan(4, 8, 5);
        assert_eq!(plan.total_time_minutes, 200);
        assert_eq!(plan.sessions[0].time_required_minutes, 45);
        assert_eq!(plan.sessions[3].time_required_minutes, 65);
    }

    #[test]
    fn test_zero_difference_baseline_stage() {
        let plan = plan(5, 5, 5);
        assert_eq!(plan.number_of_sessions, 1);
        assert_eq!(plan.sessions.len(), 1);
        assert_eq!(plan.sessions[0].stage_level, 5);
        assert!(plan.sessions[0]
            .warnings
            .iter()
            .any(|w| w.contains("No level change")));
    }

    #[test]
    fn test_final_stage_names_toner() {
        let plan = plan(4, 8, 5);
        let last = plan.sessions.last().unwrap();
        assert!(last
            .recommendations
            .iter()
            .any(|r| r.contains("Blue/Violet-based")));
    }

    #[test]
    fn test_tones_flow_into_stage_recommendations() {
        let config = ResolvedConfig::defaults().unwrap();
        let mut req = request(4, 8, 5);
        req.start_tone = Some(ToneSpecification::new("Ash Black", 5));
        req.target_tone = Some(ToneSpecification::new("Copper Black", 5));
        let plan = plan_sessions(&req, &config).unwrap();
        // 20 volume per one-level stage with warm-intense target: 1:1.5
        assert!(plan.sessions[0]
            .recommendations
            .iter()
            .any(|r| r.contains("1:1.5")));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let config = ResolvedConfig::defaults().unwrap();
        let result = plan_sessions(&request(0, 8, 5), &config);
        assert!(result.is_err());
    }
}
