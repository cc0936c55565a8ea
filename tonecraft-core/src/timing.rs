//! Processing-time estimation
//!
//! One continuous formula: additions join the base, the lift/porosity
//! ratio scales it, the resistance multiplier applies last.
//!
//! Global invariants enforced:
//! - Processing time never drops below the configured floor
//! - The headline minutes equal the processing phase, not the phase sum
//! - Toning phase is present iff the target undertone is warm

use crate::config::ResolvedConfig;
use crate::lift::LiftClassification;
use crate::profile::{HairCondition, HairProfile, Texture};
use crate::tone::Undertone;
use serde::{Deserialize, Serialize};

/// Added minutes for coarse texture
const COARSE_TEXTURE_ADDITION_MINUTES: u32 = 15;

/// Multiplier for resistant hair, applied after all additions
const RESISTANT_MULTIPLIER: f64 = 1.5;

/// Per-phase minute breakdown.
///
/// The toning phase is absent (not zero) when no toner applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PhaseBreakdown {
    pub application: u32,
    pub processing: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toning: Option<u32>,
}

impl PhaseBreakdown {
    /// Sum of all present phases
    pub fn total(&self) -> u32 {
        self.application + self.processing + self.toning.unwrap_or(0)
    }
}

/// Processing estimate with phase breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingEstimate {
    /// Headline minutes: the processing phase value
    pub total_minutes: u32,
    pub phases: PhaseBreakdown,
    pub warnings: Vec<String>,
}

/// Estimate processing time for a classified lift.
///
/// Formula: (base + coarse addition + tone-cross penalty)
/// × level_difference / (porosity / 5), ×1.5 when resistant, rounded to
/// the nearest minute, floored at the configured minimum. A zero level
/// difference skips the lift scaling and reports the base time with a
/// non-fatal warning.
pub fn estimate_processing(
    profile: &HairProfile,
    condition: &HairCondition,
    lift: &LiftClassification,
    cross_penalty_minutes: u32,
    target_undertone: Undertone,
    config: &ResolvedConfig,
) -> ProcessingEstimate {
    let mut warnings = Vec::new();

    let mut base = f64::from(config.base_processing_minutes);
    if condition.texture == Texture::Coarse {
        base += f64::from(COARSE_TEXTURE_ADDITION_MINUTES);
    }
    base += f64::from(cross_penalty_minutes);

    let scaled = if lift.level_difference == 0 {
        warnings.push("No level change requested; reporting baseline processing time".to_string());
        base
    } else {
        base * f64::from(lift.level_difference) / (f64::from(profile.porosity) / 5.0)
    };

    let with_resistance = if condition.resistant {
        scaled * RESISTANT_MULTIPLIER
    } else {
        scaled
    };

    let minutes = (with_resistance.round() as u32).max(config.minimum_processing_minutes);

    let toning = if target_undertone.is_warm() {
        Some(config.toning_minutes)
    } else {
        None
    };

    ProcessingEstimate {
        total_minutes: minutes,
        phases: PhaseBreakdown {
            application: config.application_minutes,
            processing: minutes,
            toning,
        },
        warnings,
    }
}
