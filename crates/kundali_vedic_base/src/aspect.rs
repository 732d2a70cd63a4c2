//! Angular aspects between a transiting and a natal longitude.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::{angular_separation, check_longitude};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

/// Priority order used when matching.
pub const ALL_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
        }
    }

    pub const fn nature(self) -> AspectNature {
        match self {
            Self::Conjunction => AspectNature::Intense,
            Self::Opposition | Self::Square => AspectNature::Challenging,
            Self::Trine | Self::Sextile => AspectNature::Harmonious,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Trine => "trine",
            Self::Square => "square",
            Self::Sextile => "sextile",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Intense,
    Challenging,
    Harmonious,
}

/// Allowed deviation per aspect, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectOrbs {
    pub conjunction: f64,
    pub opposition: f64,
    pub trine: f64,
    pub square: f64,
    pub sextile: f64,
}

impl Default for AspectOrbs {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            opposition: 8.0,
            trine: 6.0,
            square: 6.0,
            sextile: 4.0,
        }
    }
}

impl AspectOrbs {
    pub const fn orb(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Opposition => self.opposition,
            AspectKind::Trine => self.trine,
            AspectKind::Square => self.square,
            AspectKind::Sextile => self.sextile,
        }
    }

    /// Every orb must be finite and positive.
    pub fn validate(&self) -> Result<(), VedicError> {
        for kind in ALL_ASPECTS {
            let orb = self.orb(kind);
            if !orb.is_finite() || orb <= 0.0 {
                return Err(VedicError::InvalidInput(format!(
                    "{kind} orb must be positive, got {orb}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub kind: AspectKind,
    pub nature: AspectNature,
    pub exact_angle: f64,
    /// Shortest arc between the two longitudes.
    pub actual_angle: f64,
    /// Deviation from the exact angle.
    pub orb: f64,
    /// `1 - orb / allowed_orb`, in [0, 1].
    pub exactness: f64,
}

/// Aspect formed between two sidereal longitudes, if any.
///
/// Aspects are tried in priority order; a later aspect replaces an earlier
/// match only when strictly closer. Under the default orbs no two windows
/// overlap, so this is plain first-match.
pub fn find_aspect(a: f64, b: f64, orbs: &AspectOrbs) -> Result<Option<AspectMatch>, VedicError> {
    let a = check_longitude(a)?;
    let b = check_longitude(b)?;
    let separation = angular_separation(a, b);

    let mut best: Option<AspectMatch> = None;
    for kind in ALL_ASPECTS {
        let allowed = orbs.orb(kind);
        let deviation = (separation - kind.angle()).abs();
        if deviation > allowed {
            continue;
        }
        if best.is_some_and(|m| m.orb <= deviation) {
            continue;
        }
        best = Some(AspectMatch {
            kind,
            nature: kind.nature(),
            exact_angle: kind.angle(),
            actual_angle: separation,
            orb: deviation,
            exactness: (1.0 - deviation / allowed).clamp(0.0, 1.0),
        });
    }
    Ok(best)
}

/// How much a transit matters, most important first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    Critical,
    Major,
    Notable,
    Minor,
}

impl Significance {
    pub const fn is_major(self) -> bool {
        matches!(self, Self::Critical | Self::Major)
    }
}

pub fn significance_for(transit: Graha, exactness: f64) -> Significance {
    match (transit.is_slow(), exactness > 0.8) {
        (true, true) => Significance::Critical,
        (true, false) => Significance::Major,
        (false, true) => Significance::Notable,
        (false, false) => Significance::Minor,
    }
}

/// Overall reading of the major transits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitTone {
    Challenging,
    Favorable,
    Mixed,
}

impl TransitTone {
    pub fn from_counts(challenging: usize, harmonious: usize) -> Self {
        use std::cmp::Ordering::*;
        match challenging.cmp(&harmonious) {
            Greater => Self::Challenging,
            Less => Self::Favorable,
            Equal => Self::Mixed,
        }
    }

    pub const fn interpretation(self) -> &'static str {
        match self {
            Self::Challenging => {
                "Current transits indicate a period requiring patience and careful action."
            }
            Self::Favorable => "Current transits support positive developments and opportunities.",
            Self::Mixed => "Current transits bring a mix of opportunities and challenges.",
        }
    }
}

/// One-line effect of a transiting graha forming an aspect of `nature`.
pub const fn transit_effect(nature: AspectNature, graha: Graha) -> &'static str {
    use AspectNature::*;
    use Graha::*;
    match (nature, graha) {
        (Harmonious, Sun) => "Positive energy boost for self-expression and authority",
        (Harmonious, Moon) => "Emotional harmony and mental peace",
        (Harmonious, Mars) => "Constructive action and healthy competition",
        (Harmonious, Mercury) => "Clear communication and good decisions",
        (Harmonious, Jupiter) => "Growth opportunities and good fortune",
        (Harmonious, Venus) => "Love, beauty, and financial gains",
        (Harmonious, Saturn) => "Productive discipline and lasting achievements",
        (Harmonious, Rahu) => "Unconventional opportunities that work out well",
        (Harmonious, Ketu) => "Spiritual insights and letting go gracefully",

        (Challenging, Sun) => "Ego conflicts and need to prove yourself",
        (Challenging, Moon) => "Emotional turbulence and mental stress",
        (Challenging, Mars) => "Impulsive actions and potential conflicts",
        (Challenging, Mercury) => "Miscommunication and hasty decisions",
        (Challenging, Jupiter) => "Overconfidence and missed opportunities",
        (Challenging, Venus) => "Relationship tensions and overspending",
        (Challenging, Saturn) => "Obstacles, delays, and hard lessons",
        (Challenging, Rahu) => "Confusion and unhealthy desires",
        (Challenging, Ketu) => "Detachment anxiety and loss of direction",

        (Intense, Sun) => "Powerful transformation of self-identity",
        (Intense, Moon) => "Intensified emotions and new beginnings",
        (Intense, Mars) => "Surge of energy for major initiatives",
        (Intense, Mercury) => "Important communications and new ideas",
        (Intense, Jupiter) => "Major expansion and life-changing luck",
        (Intense, Venus) => "Significant relationships and financial changes",
        (Intense, Saturn) => "Major karmic events and restructuring",
        (Intense, Rahu) => "Obsessive focus on new desires",
        (Intense, Ketu) => "Deep spiritual awakening or release",
    }
}

/// Life areas a graha signifies.
pub const fn significations(graha: Graha) -> &'static [&'static str] {
    match graha {
        Graha::Sun => &["self", "vitality", "authority", "career", "father"],
        Graha::Moon => &["mind", "emotions", "mother", "public", "comfort"],
        Graha::Mars => &["energy", "action", "courage", "conflict", "siblings"],
        Graha::Mercury => &["communication", "intellect", "business", "education"],
        Graha::Jupiter => &["wisdom", "luck", "expansion", "spirituality", "guru"],
        Graha::Venus => &["love", "beauty", "wealth", "arts", "relationships"],
        Graha::Saturn => &["discipline", "karma", "delays", "structure", "lessons"],
        Graha::Rahu => &["desires", "obsession", "unconventional", "foreign"],
        Graha::Ketu => &["spirituality", "detachment", "past karma", "liberation"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aspect(a: f64, b: f64) -> Option<AspectMatch> {
        find_aspect(a, b, &AspectOrbs::default()).unwrap()
    }

    #[test]
    fn exact_conjunction() {
        let m = aspect(10.0, 10.0).unwrap();
        assert_eq!(m.kind, AspectKind::Conjunction);
        assert_eq!(m.nature, AspectNature::Intense);
        assert!((m.exactness - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exact_square() {
        let m = aspect(0.0, 90.0).unwrap();
        assert_eq!(m.kind, AspectKind::Square);
        assert!((m.exactness - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ninety_five_degrees_is_a_loose_square() {
        let m = aspect(0.0, 95.0).unwrap();
        assert_eq!(m.kind, AspectKind::Square);
        assert!((m.orb - 5.0).abs() < 1e-12);
        assert!((m.exactness - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn gap_between_windows_has_no_aspect() {
        assert!(aspect(0.0, 100.0).is_none());
        assert!(aspect(0.0, 30.0).is_none());
    }

    #[test]
    fn separation_wraps() {
        let m = aspect(357.0, 3.0).unwrap();
        assert_eq!(m.kind, AspectKind::Conjunction);
        assert!((m.actual_angle - 6.0).abs() < 1e-9);
        // 10° across 0° is outside the conjunction orb
        assert!(aspect(355.0, 5.0).is_none());
        let m = aspect(350.0, 170.0).unwrap();
        assert_eq!(m.kind, AspectKind::Opposition);
    }

    #[test]
    fn wide_orbs_prefer_the_closer_aspect() {
        let orbs = AspectOrbs {
            trine: 40.0,
            square: 40.0,
            ..AspectOrbs::default()
        };
        // 95° sits inside both windows; square is 5° away, trine 25°
        let m = find_aspect(0.0, 95.0, &orbs).unwrap().unwrap();
        assert_eq!(m.kind, AspectKind::Square);
        // equal distance keeps priority order
        let m = find_aspect(0.0, 105.0, &orbs).unwrap().unwrap();
        assert_eq!(m.kind, AspectKind::Trine);
    }

    #[test]
    fn significance_tiers() {
        assert_eq!(significance_for(Graha::Saturn, 0.9), Significance::Critical);
        assert_eq!(significance_for(Graha::Rahu, 0.5), Significance::Major);
        assert_eq!(significance_for(Graha::Venus, 0.81), Significance::Notable);
        assert_eq!(significance_for(Graha::Moon, 0.8), Significance::Minor);
        assert!(Significance::Critical < Significance::Minor);
    }

    #[test]
    fn tone_from_counts() {
        assert_eq!(TransitTone::from_counts(2, 1), TransitTone::Challenging);
        assert_eq!(TransitTone::from_counts(0, 1), TransitTone::Favorable);
        assert_eq!(TransitTone::from_counts(0, 0), TransitTone::Mixed);
    }

    #[test]
    fn rejects_bad_orbs_and_longitudes() {
        let orbs = AspectOrbs {
            sextile: 0.0,
            ..AspectOrbs::default()
        };
        assert!(orbs.validate().is_err());
        assert!(AspectOrbs::default().validate().is_ok());
        assert!(find_aspect(400.0, 0.0, &AspectOrbs::default()).is_err());
    }

    #[test]
    fn every_graha_has_effects() {
        for g in crate::graha::ALL_GRAHAS {
            assert!(!significations(g).is_empty());
            assert!(!transit_effect(AspectNature::Intense, g).is_empty());
        }
    }
}
