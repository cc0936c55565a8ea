//! Lift band classification
//!
//! Global invariants enforced:
//! - Deterministic banding (same difference = same band)
//! - Monotonic in the level difference

use crate::profile::HairProfile;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Lift band classification by absolute level difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiftBand {
    None,     // 0
    Minor,    // 1
    Moderate, // 2
    Major,    // 3-4
    Extreme,  // > 4
}

impl LiftBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiftBand::None => "none",
            LiftBand::Minor => "minor",
            LiftBand::Moderate => "moderate",
            LiftBand::Major => "major",
            LiftBand::Extreme => "extreme",
        }
    }

    /// Bucket a level difference into its band
    pub fn classify(level_difference: u8) -> LiftBand {
        match level_difference {
            0 => LiftBand::None,
            1 => LiftBand::Minor,
            2 => LiftBand::Moderate,
            3 | 4 => LiftBand::Major,
            _ => LiftBand::Extreme,
        }
    }
}

/// Validated lift classification for a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftClassification {
    pub level_difference: u8,
    pub band: LiftBand,
}

/// Classify the requested change after validating the profile.
///
/// Out-of-range levels or porosity fail here; no partial result is
/// produced downstream.
pub fn classify_lift(profile: &HairProfile) -> Result<LiftClassification> {
    profile.validate()?;
    let level_difference = profile.level_difference();
    Ok(LiftClassification {
        level_difference,
        band: LiftBand::classify(level_difference),
    })
}
