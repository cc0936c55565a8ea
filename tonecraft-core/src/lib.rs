//! Tonecraft core library - hair-color formulation recommendations

#![deny(warnings)]

// Global invariants enforced in this crate:
// - The pipeline is pure: no global mutable state, no I/O in any stage
// - Stage order is fixed: lift, developer, timing, tone, mixing,
//   session planning, advisory notes
// - No randomness, clocks, threads, or async in the engine
// - Identical input yields byte-for-byte identical output
// - Domain failures surface as warnings in the output, never as errors;
//   only malformed input is an error

pub mod advisory;
pub mod config;
pub mod developer;
pub mod lift;
pub mod mixing;
pub mod profile;
pub mod report;
pub mod session;
pub mod store;
pub mod timing;
pub mod tone;

pub use config::ResolvedConfig;
pub use profile::{
    FormulationRequest, HairCondition, HairProfile, ScalpCondition, Texture, ToneSpecification,
};
pub use report::{
    render_json, render_plan_text, render_text, FormulationRecommendation, Session, SessionPlan,
};
pub use store::{FormulaStore, SavedFormula};

use advisory::AdvisoryInput;
use anyhow::Result;
use tone::Undertone;

/// Compute a formulation recommendation with default configuration
pub fn recommend(request: &FormulationRequest) -> Result<FormulationRecommendation> {
    recommend_with_config(request, &ResolvedConfig::defaults()?)
}

/// Compute a formulation recommendation.
///
/// Runs the full stage pipeline over the validated request. Tone-dependent
/// outputs are present only when the request carries both tones.
pub fn recommend_with_config(
    request: &FormulationRequest,
    config: &ResolvedConfig,
) -> Result<FormulationRecommendation> {
    request.validate()?;

    let lift = lift::classify_lift(&request.profile)?;
    let advice = developer::advise_developer(&lift, &request.profile, &request.condition, config);

    let transition = request
        .tones()
        .map(|(start, target)| tone::analyze_transition(start, target));

    let undertone = Undertone::for_level(request.profile.target_level);
    let estimate = timing::estimate_processing(
        &request.profile,
        &request.condition,
        &lift,
        transition.map_or(0, |t| t.cross_penalty_minutes),
        undertone,
        config,
    );

    let toner = tone::advise_toner(undertone);
    let ratio = mixing::select_ratio(advice.volume, transition.as_ref());

    let notes = advisory::generate_notes(
        &AdvisoryInput {
            profile: &request.profile,
            lift: &lift,
            advice: &advice,
            estimate: &estimate,
            transition: transition.as_ref(),
            target_tone: request.target_tone.as_ref(),
            ratio,
        },
        config,
    );

    let mut warnings = advice.warnings;
    warnings.extend(estimate.warnings.iter().cloned());

    Ok(FormulationRecommendation {
        developer_volume: advice.volume.volume(),
        processing_time_minutes: estimate.total_minutes,
        phases: estimate.phases,
        mixing_ratio: ratio.as_str().to_string(),
        undertone: undertone.as_str().to_string(),
        toner,
        reasoning: notes.reasoning,
        warnings,
        considerations: notes.considerations,
    })
}

/// Plan the journey as bounded sessions with default configuration
pub fn plan_sessions(request: &FormulationRequest) -> Result<SessionPlan> {
    session::plan_sessions(request, &ResolvedConfig::defaults()?)
}

/// Plan the journey as bounded sessions
pub fn plan_sessions_with_config(
    request: &FormulationRequest,
    config: &ResolvedConfig,
) -> Result<SessionPlan> {
    session::plan_sessions(request, config)
}
