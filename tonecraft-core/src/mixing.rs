//! Color-to-developer mixing ratio selection
//!
//! Global invariants enforced:
//! - Rule precedence is fixed; the developer-volume rule always lands last
//! - Absent tone information falls back to the volume rule alone

use crate::developer::DeveloperVolume;
use crate::tone::{ToneFamily, ToneTransition};
use serde::{Deserialize, Serialize};

/// Color : developer proportion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixingRatio {
    OneToOne,
    OneToOneAndHalf,
    OneToTwo,
}

impl MixingRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            MixingRatio::OneToOne => "1:1",
            MixingRatio::OneToOneAndHalf => "1:1.5",
            MixingRatio::OneToTwo => "1:2",
        }
    }
}

/// Select the mixing ratio.
///
/// Rules evaluate in precedence order, last match wins:
/// 1. intense / warm-intense target -> 1:1.5
/// 2. cool target from a non-cool start -> 1:2
/// 3. developer volume >= 30 -> 1:2
pub fn select_ratio(volume: DeveloperVolume, transition: Option<&ToneTransition>) -> MixingRatio {
    let mut ratio = MixingRatio::OneToOne;

    if let Some(transition) = transition {
        if matches!(
            transition.target_family,
            ToneFamily::Intense | ToneFamily::WarmIntense
        ) {
            ratio = MixingRatio::OneToOneAndHalf;
        }
        if transition.target_family == ToneFamily::Cool
            && transition.start_family != ToneFamily::Cool
        {
            ratio = MixingRatio::OneToTwo;
        }
    }

    if volume.volume() >= 30 {
        ratio = MixingRatio::OneToTwo;
    }

    ratio
}
