//! Developer strength selection
//!
//! Picks a base developer volume from the lift band, then applies
//! condition-driven reductions.
//!
//! Global invariants enforced:
//! - Volume domain is {10, 20, 30, 40}
//! - Condition adjustments never reduce below 20 volume
//! - Adjustments apply independently and sequentially, never compounding

use crate::config::ResolvedConfig;
use crate::lift::{LiftBand, LiftClassification};
use crate::profile::{HairCondition, HairProfile, ScalpCondition, Texture};
use serde::{Deserialize, Serialize};

/// Oxidizing-agent strength controlling lift power
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeveloperVolume {
    Ten,
    Twenty,
    Thirty,
    Forty,
}

impl DeveloperVolume {
    /// Numeric volume value
    pub fn volume(&self) -> u32 {
        match self {
            DeveloperVolume::Ten => 10,
            DeveloperVolume::Twenty => 20,
            DeveloperVolume::Thirty => 30,
            DeveloperVolume::Forty => 40,
        }
    }

    /// One 10-volume step down, floored at 20
    pub fn reduced(&self) -> DeveloperVolume {
        match self {
            DeveloperVolume::Forty => DeveloperVolume::Thirty,
            DeveloperVolume::Thirty => DeveloperVolume::Twenty,
            DeveloperVolume::Twenty | DeveloperVolume::Ten => *self,
        }
    }

    /// Base selection from the lift band
    pub fn base_for_band(band: LiftBand) -> DeveloperVolume {
        match band {
            LiftBand::None | LiftBand::Minor => DeveloperVolume::Twenty,
            LiftBand::Moderate => DeveloperVolume::Thirty,
            LiftBand::Major | LiftBand::Extreme => DeveloperVolume::Forty,
        }
    }
}

/// Developer strength advice with the rationale behind each adjustment
#[derive(Debug, Clone)]
pub struct DeveloperAdvice {
    pub volume: DeveloperVolume,
    pub reasoning: Vec<String>,
    pub warnings: Vec<String>,
}

/// Select developer strength for a classified lift.
///
/// The extreme band keeps 40 volume; the accompanying warning delegates
/// the actual journey split to the session planner.
pub fn advise_developer(
    lift: &LiftClassification,
    profile: &HairProfile,
    condition: &HairCondition,
    config: &ResolvedConfig,
) -> DeveloperAdvice {
    let mut volume = DeveloperVolume::base_for_band(lift.band);
    let mut reasoning = Vec::new();
    let mut warnings = Vec::new();

    if lift.band == LiftBand::Extreme {
        warnings.push(format!(
            "A {}-level change exceeds the safe single-session limit and requires multiple sessions",
            lift.level_difference
        ));
    }

    if condition.scalp == ScalpCondition::Sensitive {
        volume = volume.reduced();
        reasoning.push(format!(
            "Sensitive scalp: developer reduced to {} volume to limit irritation",
            volume.volume()
        ));
    }

    if condition.texture == Texture::Fine {
        volume = volume.reduced();
        reasoning.push(format!(
            "Fine hair lifts quickly; developer reduced to {} volume",
            volume.volume()
        ));
    }

    if profile.porosity > config.high_porosity_threshold {
        volume = volume.reduced();
        warnings.push(format!(
            "High porosity ({}): developer reduced to {} volume to avoid over-processing",
            profile.porosity,
            volume.volume()
        ));
    }

    if condition.bleached {
        volume = volume.reduced();
        warnings.push(format!(
            "Previously bleached hair: developer reduced to {} volume to protect compromised strands",
            volume.volume()
        ));
    }

    DeveloperAdvice {
        volume,
        reasoning,
        warnings,
    }
}
