//! Whole-sign transit aspects to a natal sign, and the 1-5 ratings built
//! from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignAspect {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Neutral,
}

impl SignAspect {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Trine => "trine",
            Self::Square => "square",
            Self::Sextile => "sextile",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SignAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aspect by sign distance `(transit - natal) mod 12`.
pub const fn sign_aspect(transit: Rashi, natal: Rashi) -> SignAspect {
    let d = (transit.index() as i16 - natal.index() as i16).rem_euclid(12);
    match d {
        0 => SignAspect::Conjunction,
        6 => SignAspect::Opposition,
        4 | 8 => SignAspect::Trine,
        3 | 9 => SignAspect::Square,
        2 | 10 => SignAspect::Sextile,
        _ => SignAspect::Neutral,
    }
}

/// A transiting graha seen from one natal sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignTransit {
    pub graha: Graha,
    pub rashi: Rashi,
    /// Degrees within `rashi`.
    pub degree: f64,
    pub aspect: SignAspect,
    pub is_retro: bool,
}

impl SignTransit {
    pub fn new(graha: Graha, rashi: Rashi, degree: f64, natal: Rashi, is_retro: bool) -> Self {
        Self {
            graha,
            rashi,
            degree,
            aspect: sign_aspect(rashi, natal),
            is_retro,
        }
    }

    /// Signed rating contribution of this transit.
    pub fn points(&self) -> f64 {
        let points = match self.aspect {
            SignAspect::Trine => 1.0,
            SignAspect::Sextile => 0.5,
            SignAspect::Square => -0.5,
            SignAspect::Opposition => -1.0,
            SignAspect::Conjunction => match self.graha {
                Graha::Venus | Graha::Jupiter => 0.5,
                _ => -0.3,
            },
            SignAspect::Neutral => 0.0,
        };
        if self.is_retro { points * 0.5 } else { points }
    }
}

const CAREER: [Graha; 4] = [Graha::Sun, Graha::Saturn, Graha::Jupiter, Graha::Mercury];
const LOVE: [Graha; 3] = [Graha::Venus, Graha::Moon, Graha::Mars];
const HEALTH: [Graha; 3] = [Graha::Mars, Graha::Sun, Graha::Saturn];

/// Star ratings, each 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    pub overall: u8,
    pub career: u8,
    pub love: u8,
    pub health: u8,
}

fn to_stars(score: f64) -> u8 {
    score.round_ties_even().clamp(1.0, 5.0) as u8
}

/// Fold transits into ratings. Every area starts at 3.
pub fn sign_ratings(transits: &[SignTransit]) -> Ratings {
    let (mut overall, mut career, mut love, mut health) = (3.0, 3.0, 3.0, 3.0);
    for t in transits {
        let p = t.points();
        overall += p * 0.5;
        if CAREER.contains(&t.graha) {
            career += p;
        }
        if LOVE.contains(&t.graha) {
            love += p;
        }
        if HEALTH.contains(&t.graha) {
            health += p;
        }
    }
    Ratings {
        overall: to_stars(overall),
        career: to_stars(career),
        love: to_stars(love),
        health: to_stars(health),
    }
}
