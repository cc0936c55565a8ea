//! Advisory note assembly
//!
//! Builds the human-readable rationale and the additional-considerations
//! list from every prior stage's output.
//!
//! Global invariants enforced:
//! - Assembly order is fixed: developer, porosity, tone family,
//!   processing time, mixing ratio, additional considerations
//! - Notes are derived from stage outputs only, never recomputed

use crate::config::ResolvedConfig;
use crate::developer::DeveloperAdvice;
use crate::lift::LiftClassification;
use crate::mixing::MixingRatio;
use crate::profile::{HairProfile, ToneSpecification};
use crate::timing::ProcessingEstimate;
use crate::tone::ToneTransition;

/// Porosity at or below this reads as a tightly closed cuticle
const LOW_POROSITY_CEILING: u8 = 3;

/// Porosity at or above this reads as an open cuticle
const HIGH_POROSITY_FLOOR: u8 = 8;

/// Darkening beyond this many levels requires a color fill
const COLOR_FILL_THRESHOLD: u8 = 2;

/// Level difference beyond this earns the multi-session consideration
const MULTI_SESSION_NOTE_THRESHOLD: u8 = 3;

/// Assembled rationale and considerations
#[derive(Debug, Clone, Default)]
pub struct AdvisoryNotes {
    pub reasoning: Vec<String>,
    pub considerations: Vec<String>,
}

/// Everything the note generator consumes
pub struct AdvisoryInput<'a> {
    pub profile: &'a HairProfile,
    pub lift: &'a LiftClassification,
    pub advice: &'a DeveloperAdvice,
    pub estimate: &'a ProcessingEstimate,
    pub transition: Option<&'a ToneTransition>,
    pub target_tone: Option<&'a ToneSpecification>,
    pub ratio: MixingRatio,
}

/// Assemble all advisory notes in the fixed order
pub fn generate_notes(input: &AdvisoryInput, config: &ResolvedConfig) -> AdvisoryNotes {
    let mut notes = AdvisoryNotes::default();

    note_developer_choice(input, &mut notes);
    note_porosity(input.profile, &mut notes);
    note_tone_family(input.transition, &mut notes);
    note_processing_time(input, &mut notes);
    note_mixing_ratio(input, &mut notes);
    note_additional_considerations(input, config, &mut notes);

    notes
}

fn direction_phrase(profile: &HairProfile) -> &'static str {
    if profile.is_lightening() {
        "lightening"
    } else if profile.is_darkening() {
        "darkening"
    } else {
        "maintaining the current level"
    }
}

/// Developer-volume rationale, followed by the advisor's adjustment notes
fn note_developer_choice(input: &AdvisoryInput, notes: &mut AdvisoryNotes) {
    notes.reasoning.push(format!(
        "{} volume developer selected for a {}-level change ({} lift band, {})",
        input.advice.volume.volume(),
        input.lift.level_difference,
        input.lift.band.as_str(),
        direction_phrase(input.profile)
    ));
    notes
        .reasoning
        .extend(input.advice.reasoning.iter().cloned());
}

/// Porosity-specific guidance
fn note_porosity(profile: &HairProfile, notes: &mut AdvisoryNotes) {
    let porosity = profile.porosity;
    let note = if porosity <= LOW_POROSITY_CEILING {
        format!(
            "Porosity {} (low): the cuticle is tightly closed, so expect stronger developer and longer processing; pre-treat with a porosity equalizer",
            porosity
        )
    } else if porosity >= HIGH_POROSITY_FLOOR {
        format!(
            "Porosity {} (high): the cuticle is open and grabs color fast, so process gently and check early; schedule a protein treatment 3-7 days before the service",
            porosity
        )
    } else {
        format!("Porosity {} (medium): standard absorption expected", porosity)
    };
    notes.reasoning.push(note);
}

/// Tone-family-change explanation, when tones were supplied and differ
fn note_tone_family(transition: Option<&ToneTransition>, notes: &mut AdvisoryNotes) {
    let Some(transition) = transition else {
        return;
    };
    if !transition.family_change {
        return;
    }
    notes.reasoning.push(format!(
        "Shifting from the {} tone family to {} changes the underlying pigment balance; formulate for the target family",
        transition.start_family.as_str(),
        transition.target_family.as_str()
    ));
    if transition.cross_penalty_minutes > 0 {
        notes.reasoning.push(format!(
            "Crossing between cool and warm-intense adds {} minutes of processing",
            transition.cross_penalty_minutes
        ));
    }
}

/// Processing-time rationale plus the fixed monitoring reminder
fn note_processing_time(input: &AdvisoryInput, notes: &mut AdvisoryNotes) {
    notes.reasoning.push(format!(
        "Processing time of {} minutes reflects the {}-level change at porosity {}",
        input.estimate.total_minutes, input.lift.level_difference, input.profile.porosity
    ));
    notes
        .reasoning
        .push("Monitor color development every 5-10 minutes during processing".to_string());
}

/// Mixing-ratio rationale referencing developer strength and tone intensity
fn note_mixing_ratio(input: &AdvisoryInput, notes: &mut AdvisoryNotes) {
    let note = match input.target_tone {
        Some(tone) => format!(
            "Mix color to developer at {} for {} volume developer and a target tone intensity of {}",
            input.ratio.as_str(),
            input.advice.volume.volume(),
            tone.intensity
        ),
        None => format!(
            "Mix color to developer at {} for {} volume developer",
            input.ratio.as_str(),
            input.advice.volume.volume()
        ),
    };
    notes.reasoning.push(note);
}

/// Additional considerations: multi-session, color fill, tone family,
/// bond builder
fn note_additional_considerations(
    input: &AdvisoryInput,
    config: &ResolvedConfig,
    notes: &mut AdvisoryNotes,
) {
    let diff = input.lift.level_difference;

    if diff > MULTI_SESSION_NOTE_THRESHOLD {
        notes.considerations.push(format!(
            "A {}-level change cannot be completed safely in one sitting; plan the journey across sessions",
            diff
        ));
    }

    if input.profile.is_darkening() && diff > COLOR_FILL_THRESHOLD {
        notes.considerations.push(format!(
            "Darkening by {} levels requires a color fill first to replace the missing warm pigment",
            diff
        ));
    }

    if let Some(transition) = input.transition {
        if transition.family_change {
            notes.considerations.push(format!(
                "Tone family change ({} to {}): a follow-up gloss may be needed to settle the final tone",
                transition.start_family.as_str(),
                transition.target_family.as_str()
            ));
        }
    }

    if diff > config.bond_builder_threshold {
        notes.considerations.push(
            "Add a bond builder to the formula to protect the hair through a large change"
                .to_string(),
        );
    }
}
