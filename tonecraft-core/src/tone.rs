//! Undertone exposure, toner selection, and tone-family transitions
//!
//! Global invariants enforced:
//! - Undertone banding is exact and monotonic in the target level
//! - Toner is recommended iff the exposed undertone is warm
//! - Family classification is an ordered keyword table; table order is
//!   authoritative when a name carries more than one keyword

use crate::profile::ToneSpecification;
use serde::{Deserialize, Serialize};

/// Extra processing minutes when crossing between the cool and
/// warm-intense families
pub const CROSS_FAMILY_PENALTY_MINUTES: u32 = 5;

/// Residual pigment exposed when hair is lifted to a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Undertone {
    BlueBlack,
    DeepRedOrange,
    RedCopper,
    OrangeGold,
    Yellow,
}

impl Undertone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Undertone::BlueBlack => "Blue/Black",
            Undertone::DeepRedOrange => "Deep Red/Orange",
            Undertone::RedCopper => "Red/Copper",
            Undertone::OrangeGold => "Orange/Gold",
            Undertone::Yellow => "Yellow",
        }
    }

    /// Expected undertone at a target level
    pub fn for_level(level: u8) -> Undertone {
        match level {
            0..=2 => Undertone::BlueBlack,
            3..=4 => Undertone::DeepRedOrange,
            5..=6 => Undertone::RedCopper,
            7..=8 => Undertone::OrangeGold,
            _ => Undertone::Yellow,
        }
    }

    /// Warm bands expose gold or yellow and call for toning
    pub fn is_warm(&self) -> bool {
        matches!(self, Undertone::OrangeGold | Undertone::Yellow)
    }
}

/// Corrective toner base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TonerType {
    VioletBased,
    BlueVioletBased,
    GreenBlueBased,
}

impl TonerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TonerType::VioletBased => "Violet-based",
            TonerType::BlueVioletBased => "Blue/Violet-based",
            TonerType::GreenBlueBased => "Green/Blue-based",
        }
    }

    /// Neutralizing base for an exposed undertone.
    ///
    /// Blue/Black exposes no undertone worth neutralizing.
    pub fn for_undertone(undertone: Undertone) -> Option<TonerType> {
        match undertone {
            Undertone::Yellow => Some(TonerType::VioletBased),
            Undertone::OrangeGold => Some(TonerType::BlueVioletBased),
            Undertone::DeepRedOrange | Undertone::RedCopper => Some(TonerType::GreenBlueBased),
            Undertone::BlueBlack => None,
        }
    }
}

/// Toner decision for a target level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TonerAdvice {
    pub recommended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toner_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Decide whether a corrective toner is needed at the target level
pub fn advise_toner(undertone: Undertone) -> TonerAdvice {
    if !undertone.is_warm() {
        return TonerAdvice {
            recommended: false,
            toner_type: None,
            reason: None,
        };
    }

    match TonerType::for_undertone(undertone) {
        Some(toner) => TonerAdvice {
            recommended: true,
            toner_type: Some(toner.as_str().to_string()),
            reason: Some(format!(
                "{} undertones exposed at this level need neutralizing",
                undertone.as_str()
            )),
        },
        // Warm undertones always map to a toner base
        None => TonerAdvice {
            recommended: false,
            toner_type: None,
            reason: None,
        },
    }
}

/// Tone family derived from a tone name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToneFamily {
    Cool,
    CoolNeutral,
    Neutral,
    Warm,
    WarmIntense,
    Intense,
    Natural,
}

impl ToneFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneFamily::Cool => "cool",
            ToneFamily::CoolNeutral => "cool-neutral",
            ToneFamily::Neutral => "neutral",
            ToneFamily::Warm => "warm",
            ToneFamily::WarmIntense => "warm-intense",
            ToneFamily::Intense => "intense",
            ToneFamily::Natural => "natural",
        }
    }

    /// Classify a tone name into its family.
    ///
    /// Matching is on whole case-sensitive words; the first table entry
    /// present anywhere in the name wins, so "Ash Intense" is cool.
    /// Unknown names fall back to natural.
    pub fn classify(name: &str) -> ToneFamily {
        for (keyword, family) in FAMILY_KEYWORDS {
            if name.split_whitespace().any(|word| word == *keyword) {
                return *family;
            }
        }
        ToneFamily::Natural
    }
}

/// Keyword table in precedence order
const FAMILY_KEYWORDS: &[(&str, ToneFamily)] = &[
    ("Blue", ToneFamily::Cool),
    ("Ash", ToneFamily::Cool),
    ("Violet", ToneFamily::CoolNeutral),
    ("Neutral", ToneFamily::Neutral),
    ("Warm", ToneFamily::Warm),
    ("Gold", ToneFamily::Warm),
    ("Beige", ToneFamily::Warm),
    ("Red", ToneFamily::WarmIntense),
    ("Copper", ToneFamily::WarmIntense),
    ("Mahogany", ToneFamily::WarmIntense),
    ("Chocolate", ToneFamily::Intense),
    ("Intense", ToneFamily::Intense),
];

/// Start-to-target tone family transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ToneTransition {
    pub start_family: ToneFamily,
    pub target_family: ToneFamily,
    pub family_change: bool,
    pub cross_penalty_minutes: u32,
}

/// Classify both tones and flag family changes.
///
/// Crossing between cool and warm-intense (either direction) carries a
/// processing-time penalty consumed by the estimator.
pub fn analyze_transition(
    start: &ToneSpecification,
    target: &ToneSpecification,
) -> ToneTransition {
    let start_family = ToneFamily::classify(&start.name);
    let target_family = ToneFamily::classify(&target.name);
    let family_change = start_family != target_family;

    let crosses_cool_intense = matches!(
        (start_family, target_family),
        (ToneFamily::Cool, ToneFamily::WarmIntense) | (ToneFamily::WarmIntense, ToneFamily::Cool)
    );

    ToneTransition {
        start_family,
        target_family,
        family_change,
        cross_penalty_minutes: if crosses_cool_intense {
            CROSS_FAMILY_PENALTY_MINUTES
        } else {
            0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undertone_table_exact() {
        assert_eq!(Undertone::for_level(1), Undertone::BlueBlack);
        assert_eq!(Undertone::for_level(2), Undertone::BlueBlack);
        assert_eq!(Undertone::for_level(3), Undertone::DeepRedOrange);
        assert_eq!(Undertone::for_level(4), Undertone::DeepRedOrange);
        assert_eq!(Undertone::for_level(5), Undertone::RedCopper);
        assert_eq!(Undertone::for_level(6), Undertone::RedCopper);
        assert_eq!(Undertone::for_level(7), Undertone::OrangeGold);
        assert_eq!(Undertone::for_level(8), Undertone::OrangeGold);
        assert_eq!(Undertone::for_level(9), Undertone::Yellow);
        assert_eq!(Undertone::for_level(10), Undertone::Yellow);
    }

    #[test]
    fn test_toner_recommended_iff_warm() {
        for level in 1..=10u8 {
            let undertone = Undertone::for_level(level);
            let advice = advise_toner(undertone);
            assert_eq!(advice.recommended, undertone.is_warm());
            assert_eq!(advice.toner_type.is_some(), undertone.is_warm());
        }
    }

    #[test]
    fn test_toner_type_mapping() {
        assert_eq!(
            TonerType::for_undertone(Undertone::Yellow),
            Some(TonerType::VioletBased)
        );
        assert_eq!(
            TonerType::for_undertone(Undertone::OrangeGold),
            Some(TonerType::BlueVioletBased)
        );
        assert_eq!(
            TonerType::for_undertone(Undertone::RedCopper),
            Some(TonerType::GreenBlueBased)
        );
        assert_eq!(
            TonerType::for_undertone(Undertone::DeepRedOrange),
            Some(TonerType::GreenBlueBased)
        );
        assert_eq!(TonerType::for_undertone(Undertone::BlueBlack), None);
    }

    #[test]
    fn test_family_classification() {
        assert_eq!(ToneFamily::classify("Ash Black"), ToneFamily::Cool);
        assert_eq!(ToneFamily::classify("Blue Steel"), ToneFamily::Cool);
        assert_eq!(ToneFamily::classify("Violet Pearl"), ToneFamily::CoolNeutral);
        assert_eq!(ToneFamily::classify("Neutral Brown"), ToneFamily::Neutral);
        assert_eq!(ToneFamily::classify("Golden Beige"), ToneFamily::Warm);
        assert_eq!(ToneFamily::classify("Copper Black"), ToneFamily::WarmIntense);
        assert_eq!(ToneFamily::classify("Dark Mahogany"), ToneFamily::WarmIntense);
        assert_eq!(ToneFamily::classify("Chocolate Brown"), ToneFamily::Intense);
        assert_eq!(ToneFamily::classify("Espresso"), ToneFamily::Natural);
    }

    #[test]
    fn test_family_keyword_precedence() {
        // Table order wins when a name carries two keywords
        assert_eq!(ToneFamily::classify("Ash Intense"), ToneFamily::Cool);
        assert_eq!(ToneFamily::classify("Intense Red"), ToneFamily::WarmIntense);
    }

    #[test]
    fn test_whole_word_matching() {
        // Substring hits inside a word do not classify
        assert_eq!(ToneFamily::classify("Bluebell"), ToneFamily::Natural);
        assert_eq!(ToneFamily::classify("Redwood"), ToneFamily::Natural);
    }

    #[test]
    fn test_cross_family_penalty() {
        let ash = ToneSpecification::new("Ash Black", 5);
        let copper = ToneSpecification::new("Copper Black", 5);

        let transition = analyze_transition(&ash, &copper);
        assert!(transition.family_change);
        assert_eq!(transition.cross_penalty_minutes, CROSS_FAMILY_PENALTY_MINUTES);

        // Reverse direction carries the same penalty
        let reverse = analyze_transition(&copper, &ash);
        assert_eq!(reverse.cross_penalty_minutes, CROSS_FAMILY_PENALTY_MINUTES);

        // Family change without the cool/warm-intense crossing has none
        let gold = ToneSpecification::new("Gold Beige", 5);
        let no_cross = analyze_transition(&ash, &gold);
        assert!(no_cross.family_change);
        assert_eq!(no_cross.cross_penalty_minutes, 0);
    }
}
