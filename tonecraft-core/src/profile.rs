//! Client input records and validation
//!
//! Global invariants enforced:
//! - Levels and porosity are validated to [1,10] before any stage runs
//! - Records are immutable once constructed
//! - Tone family is derived, never stored

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Darkest level on the lightness scale
pub const LEVEL_MIN: u8 = 1;
/// Lightest level on the lightness scale
pub const LEVEL_MAX: u8 = 10;
/// Lowest porosity rating
pub const POROSITY_MIN: u8 = 1;
/// Highest porosity rating
pub const POROSITY_MAX: u8 = 10;

/// Starting and target lightness plus measured porosity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HairProfile {
    pub starting_level: u8,
    pub target_level: u8,
    pub porosity: u8,
}

impl HairProfile {
    /// Validate all numeric fields against their domains
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("starting_level", self.starting_level),
            ("target_level", self.target_level),
        ] {
            if !(LEVEL_MIN..=LEVEL_MAX).contains(&value) {
                anyhow::bail!(
                    "{} must be between {} and {} (got {})",
                    name,
                    LEVEL_MIN,
                    LEVEL_MAX,
                    value
                );
            }
        }
        if !(POROSITY_MIN..=POROSITY_MAX).contains(&self.porosity) {
            anyhow::bail!(
                "porosity must be between {} and {} (got {})",
                POROSITY_MIN,
                POROSITY_MAX,
                self.porosity
            );
        }
        Ok(())
    }

    /// Absolute level change requested
    pub fn level_difference(&self) -> u8 {
        self.starting_level.abs_diff(self.target_level)
    }

    /// True when the target is lighter than the start
    pub fn is_lightening(&self) -> bool {
        self.target_level > self.starting_level
    }

    /// True when the target is darker than the start
    pub fn is_darkening(&self) -> bool {
        self.target_level < self.starting_level
    }
}

/// Hair strand thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Fine,
    Medium,
    Coarse,
}

impl Texture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Texture::Fine => "fine",
            Texture::Medium => "medium",
            Texture::Coarse => "coarse",
        }
    }
}

/// Scalp state at the time of service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalpCondition {
    Healthy,
    Sensitive,
    Irritated,
}

impl ScalpCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalpCondition::Healthy => "healthy",
            ScalpCondition::Sensitive => "sensitive",
            ScalpCondition::Irritated => "irritated",
        }
    }
}

/// Measured hair-condition attributes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HairCondition {
    pub texture: Texture,
    pub scalp: ScalpCondition,
    pub resistant: bool,
    pub bleached: bool,
    pub color_treated: bool,
}

impl Default for HairCondition {
    fn default() -> Self {
        HairCondition {
            texture: Texture::Medium,
            scalp: ScalpCondition::Healthy,
            resistant: false,
            bleached: false,
            color_treated: false,
        }
    }
}

/// A requested tone by name, e.g. "Ash" or "Copper Black"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ToneSpecification {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub intensity: u8,
}

impl ToneSpecification {
    pub fn new(name: impl Into<String>, intensity: u8) -> Self {
        ToneSpecification {
            name: name.into(),
            secondary: None,
            intensity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("tone name must not be empty");
        }
        if !(1..=10).contains(&self.intensity) {
            anyhow::bail!(
                "tone intensity must be between 1 and 10 (got {})",
                self.intensity
            );
        }
        Ok(())
    }
}

/// Complete formulation request.
///
/// All pipeline stages take this explicit request object; no stage holds
/// client state between invocations. Start and target tones travel
/// together: supplying only one is rejected so tone-dependent outputs are
/// either fully present or explicitly absent, never half-defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct FormulationRequest {
    pub profile: HairProfile,
    pub condition: HairCondition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_tone: Option<ToneSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_tone: Option<ToneSpecification>,
}

impl FormulationRequest {
    /// Validate the whole request before any stage runs
    pub fn validate(&self) -> Result<()> {
        self.profile.validate()?;
        match (&self.start_tone, &self.target_tone) {
            (Some(start), Some(target)) => {
                start.validate()?;
                target.validate()?;
            }
            (None, None) => {}
            _ => anyhow::bail!("start_tone and target_tone must be provided together"),
        }
        Ok(())
    }

    /// Both tone specifications, when the request carries them
    pub fn tones(&self) -> Option<(&ToneSpecification, &ToneSpecification)> {
        match (&self.start_tone, &self.target_tone) {
            (Some(start), Some(target)) => Some((start, target)),
            _ => None,
        }
    }
}
