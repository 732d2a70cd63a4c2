//! Ashtakoot (eight-factor) compatibility from two Moon longitudes.
//!
//! | Koot         | Max | Basis          |
//! |--------------|-----|----------------|
//! | Varna        | 1   | rashi          |
//! | Vashya       | 2   | rashi          |
//! | Tara         | 3   | nakshatra      |
//! | Yoni         | 4   | nakshatra      |
//! | Graha Maitri | 5   | rashi lords    |
//! | Gana         | 6   | nakshatra      |
//! | Bhakoot      | 7   | rashi distance |
//! | Nadi         | 8   | nakshatra      |

use serde::{Deserialize, Serialize};

use crate::ashtakoot_data::{
    Gana, gana_of, nadi_of, varna_of, vashya_of, yoni_of, yonis_are_enemies,
};
use crate::dignity::{Relationship, natural_relationship};
use crate::error::VedicError;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::check_longitude;

pub const ASHTAKOOT_MAX_SCORE: f64 = 36.0;

const AUSPICIOUS_TARAS: [u8; 6] = [1, 2, 4, 6, 8, 9];
const BHAKOOT_DOSHA_AXES: [(u8, u8); 3] = [(2, 12), (5, 9), (6, 8)];

/// One side of the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonMoon {
    pub name: String,
    pub moon_longitude: f64,
}

impl PersonMoon {
    pub fn new(name: impl Into<String>, moon_longitude: f64) -> Self {
        Self {
            name: name.into(),
            moon_longitude,
        }
    }
}

/// Moon placement of one side, as reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: String,
    pub nakshatra: Nakshatra,
    pub nakshatra_number: u8,
    pub rashi: Rashi,
    pub rashi_number: u8,
    pub moon_longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KootResult {
    pub name: String,
    pub max_score: f64,
    pub score: f64,
    pub bride_value: String,
    pub groom_value: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Average Match")]
    Average,
    #[serde(rename = "Below Average Match")]
    BelowAverage,
}

impl Verdict {
    /// ≥25 Excellent, ≥18 Good, ≥12 Average, otherwise Below Average.
    pub fn from_score(total: f64) -> Self {
        if total >= 25.0 {
            Self::Excellent
        } else if total >= 18.0 {
            Self::Good
        } else if total >= 12.0 {
            Self::Average
        } else {
            Self::BelowAverage
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Average => "Average Match",
            Self::BelowAverage => "Below Average Match",
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Highly recommended for marriage",
            Self::Good => "Recommended with minor considerations",
            Self::Average => "Can proceed with remedies",
            Self::BelowAverage => "Careful consideration advised",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub bride: PersonSummary,
    pub groom: PersonSummary,
    pub koots: Vec<KootResult>,
    pub total_score: f64,
    pub max_score: f64,
    /// Percent of 36, one decimal.
    pub percentage: f64,
    pub verdict: Verdict,
    pub recommendation: String,
}

fn koot(
    name: &str,
    max_score: f64,
    score: f64,
    bride_value: impl ToString,
    groom_value: impl ToString,
    description: impl Into<String>,
) -> KootResult {
    KootResult {
        name: name.to_string(),
        max_score,
        score,
        bride_value: bride_value.to_string(),
        groom_value: groom_value.to_string(),
        description: description.into(),
    }
}

fn varna(bride: Rashi, groom: Rashi) -> KootResult {
    let (b, g) = (varna_of(bride).rank(), varna_of(groom).rank());
    let (score, description) = if g <= b {
        (1.0, "Compatible varnas")
    } else {
        (0.0, "Varna mismatch")
    };
    koot("Varna", 1.0, score, b, g, description)
}

fn vashya(bride: Rashi, groom: Rashi) -> KootResult {
    let (b, g) = (vashya_of(bride), vashya_of(groom));
    // same rashi always shares a category, so it never needs its own branch
    let (score, description) = if b == g {
        (2.0, "Same Vashya type - excellent mutual attraction")
    } else {
        (1.0, "Partial Vashya compatibility")
    };
    koot("Vashya", 2.0, score, b, g, description)
}

/// Tara 1..=9 counted from `from` to `to`.
fn tara(from: Nakshatra, to: Nakshatra) -> u8 {
    (to.index() as i16 - from.index() as i16).rem_euclid(27) as u8 % 9 + 1
}

fn tara_koot(bride: Nakshatra, groom: Nakshatra) -> KootResult {
    let t1 = tara(bride, groom);
    let t2 = tara(groom, bride);
    let score = [t1, t2]
        .iter()
        .filter(|t| AUSPICIOUS_TARAS.contains(t))
        .count() as f64
        * 1.5;
    koot("Tara", 3.0, score, t1, t2, format!("Tara positions: {t1}, {t2}"))
}

fn yoni(bride: Nakshatra, groom: Nakshatra) -> KootResult {
    let (b, g) = (yoni_of(bride), yoni_of(groom));
    let (score, description) = if b == g {
        (4.0, "Same Yoni - excellent compatibility".to_string())
    } else if yonis_are_enemies(b, g) {
        (0.0, format!("Enemy Yonis ({b} vs {g})"))
    } else {
        (2.0, format!("Neutral Yonis ({b}, {g})"))
    };
    koot("Yoni", 4.0, score, b, g, description)
}

fn graha_maitri(bride: Rashi, groom: Rashi) -> KootResult {
    let (b, g) = (bride.lord(), groom.lord());
    let forward = natural_relationship(b, g);
    let backward = natural_relationship(g, b);
    use Relationship::*;
    let (score, description) = if b == g {
        (5.0, "Same lord - excellent mental harmony")
    } else if forward == Friend && backward == Friend {
        (5.0, "Mutual friends - very good harmony")
    } else if forward == Friend || backward == Friend {
        (4.0, "One-sided friendship - good harmony")
    } else if forward == Enemy && backward == Enemy {
        (0.0, "Mutual enemies - challenging relationship")
    } else if forward == Enemy || backward == Enemy {
        (1.0, "One-sided enmity - some challenges")
    } else {
        (2.5, "Neutral relationship")
    };
    koot("Graha Maitri", 5.0, score, b, g, description)
}

fn gana(bride: Nakshatra, groom: Nakshatra) -> KootResult {
    let (b, g) = (gana_of(bride), gana_of(groom));
    let (score, description) = match (b, g) {
        _ if b == g => (6.0, format!("Same Gana ({b}) - excellent match")),
        (Gana::Deva, Gana::Manushya) => (5.0, "Deva-Manushya - good compatibility".into()),
        (Gana::Manushya, Gana::Deva) => (5.0, "Manushya-Deva - good compatibility".into()),
        (Gana::Rakshasa, _) | (_, Gana::Rakshasa) => {
            (0.0, "Rakshasa with non-Rakshasa - not recommended".into())
        }
        _ => (3.0, format!("Partial Gana match ({b}, {g})")),
    };
    koot("Gana", 6.0, score, b, g, description)
}

fn bhakoot(bride: Rashi, groom: Rashi) -> KootResult {
    let forward = (groom.index() as i16 - bride.index() as i16).rem_euclid(12) as u8 + 1;
    let backward = (bride.index() as i16 - groom.index() as i16).rem_euclid(12) as u8 + 1;
    let dosha = BHAKOOT_DOSHA_AXES.iter().any(|&(a, b)| {
        (forward == a || forward == b) && (backward == a || backward == b)
    });
    let (score, description) = if dosha {
        (0.0, format!("Bhakoot Dosha present (position {forward})"))
    } else {
        (7.0, "No Bhakoot Dosha - harmonious".to_string())
    };
    koot("Bhakoot", 7.0, score, forward, backward, description)
}

fn nadi(bride: Nakshatra, groom: Nakshatra) -> KootResult {
    let (b, g) = (nadi_of(bride), nadi_of(groom));
    let (score, description) = if b == g {
        (0.0, format!("Same Nadi ({b}) - Nadi Dosha present"))
    } else {
        (8.0, "Different Nadis - excellent for progeny".to_string())
    };
    koot("Nadi", 8.0, score, b, g, description)
}

fn summarize(person: &PersonMoon) -> Result<PersonSummary, VedicError> {
    let lon = check_longitude(person.moon_longitude)?;
    let nak = nakshatra_from_longitude(lon).nakshatra;
    let rashi = rashi_from_longitude(lon).rashi;
    Ok(PersonSummary {
        name: person.name.clone(),
        nakshatra: nak,
        nakshatra_number: nak.number(),
        rashi,
        rashi_number: rashi.number(),
        moon_longitude: lon,
    })
}

/// Score all eight koots for a bride and groom.
pub fn ashtakoot_match(
    bride: &PersonMoon,
    groom: &PersonMoon,
) -> Result<CompatibilityReport, VedicError> {
    let b = summarize(bride)?;
    let g = summarize(groom)?;

    let koots = vec![
        varna(b.rashi, g.rashi),
        vashya(b.rashi, g.rashi),
        tara_koot(b.nakshatra, g.nakshatra),
        yoni(b.nakshatra, g.nakshatra),
        graha_maitri(b.rashi, g.rashi),
        gana(b.nakshatra, g.nakshatra),
        bhakoot(b.rashi, g.rashi),
        nadi(b.nakshatra, g.nakshatra),
    ];

    let total_score: f64 = koots.iter().map(|k| k.score).sum();
    let percentage = (total_score / ASHTAKOOT_MAX_SCORE * 1000.0).round() / 10.0;
    let verdict = Verdict::from_score(total_score);

    Ok(CompatibilityReport {
        bride: b,
        groom: g,
        koots,
        total_score,
        max_score: ASHTAKOOT_MAX_SCORE,
        percentage,
        verdict,
        recommendation: verdict.recommendation().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(bride: f64, groom: f64) -> CompatibilityReport {
        ashtakoot_match(&PersonMoon::new("B", bride), &PersonMoon::new("G", groom)).unwrap()
    }

    fn score(r: &CompatibilityReport, name: &str) -> f64 {
        r.koots.iter().find(|k| k.name == name).unwrap().score
    }

    #[test]
    fn maxima_sum_to_36() {
        let r = report(10.0, 130.0);
        let max: f64 = r.koots.iter().map(|k| k.max_score).sum();
        assert_eq!(max, ASHTAKOOT_MAX_SCORE);
        assert_eq!(r.koots.len(), 8);
    }

    #[test]
    fn identical_moons() {
        let r = report(10.0, 10.0);
        assert_eq!(score(&r, "Nadi"), 0.0);
        assert_eq!(score(&r, "Yoni"), 4.0);
        assert_eq!(score(&r, "Gana"), 6.0);
        assert_eq!(score(&r, "Bhakoot"), 7.0);
        assert_eq!(score(&r, "Tara"), 3.0);
        // 1 + 2 + 3 + 4 + 5 + 6 + 7 + 0
        assert_eq!(r.total_score, 28.0);
        assert_eq!(r.verdict, Verdict::Excellent);
    }

    #[test]
    fn ashwini_and_magha_follow_the_nadi_table() {
        // Ashwini is Vata, Magha is Kapha
        let r = report(10.0, 130.0);
        assert_eq!(r.bride.nakshatra, Nakshatra::Ashwini);
        assert_eq!(r.groom.nakshatra, Nakshatra::Magha);
        assert_eq!(score(&r, "Nadi"), 8.0);
        // Aries → Leo is the 5/9 axis
        assert_eq!(score(&r, "Bhakoot"), 0.0);
        // both Horse vs Rat, not enemies
        let yoni = r.koots.iter().find(|k| k.name == "Yoni").unwrap();
        assert_eq!(yoni.description, "Neutral Yonis (Horse, Rat)");
    }

    #[test]
    fn tara_counts_both_ways() {
        // Ashwini → Krittika is tara 3; Krittika → Ashwini is 25 % 9 + 1 = 8
        let r = report(1.0, 28.0);
        let t = r.koots.iter().find(|k| k.name == "Tara").unwrap();
        assert_eq!(t.bride_value, "3");
        assert_eq!(t.groom_value, "8");
        assert_eq!(t.score, 1.5);
    }

    #[test]
    fn maitri_cases() {
        // Leo (Sun) with Aries (Mars): mutual friends
        assert_eq!(score(&report(125.0, 5.0), "Graha Maitri"), 5.0);
        // Aries (Mars) with Gemini (Mercury): Mars hostile, Mercury neutral
        assert_eq!(score(&report(5.0, 65.0), "Graha Maitri"), 1.0);
        // Cancer (Moon) with Gemini (Mercury): Moon friendly, Mercury hostile
        assert_eq!(score(&report(95.0, 65.0), "Graha Maitri"), 4.0);
        // Leo (Sun) with Libra (Venus): mutual enemies
        assert_eq!(score(&report(125.0, 185.0), "Graha Maitri"), 0.0);
        // Aries (Mars) with Libra (Venus): both neutral
        assert_eq!(score(&report(5.0, 185.0), "Graha Maitri"), 2.5);
    }

    #[test]
    fn enemy_yonis_score_zero() {
        // Ashwini (Horse) with Hasta (Buffalo)
        let r = report(1.0, 163.0);
        assert_eq!(score(&r, "Yoni"), 0.0);
    }

    #[test]
    fn gana_rakshasa_mismatch() {
        // Ashwini (Deva) with Krittika (Rakshasa)
        let r = report(1.0, 28.0);
        assert_eq!(score(&r, "Gana"), 0.0);
        // Bharani (Manushya) with Ashwini (Deva)
        let r = report(15.0, 1.0);
        assert_eq!(score(&r, "Gana"), 5.0);
    }

    #[test]
    fn total_in_range_and_percentage_rounded() {
        for b in (0..360).step_by(17) {
            for g in (0..360).step_by(23) {
                let r = report(b as f64, g as f64);
                assert!((0.0..=36.0).contains(&r.total_score));
                let scaled = r.percentage * 10.0;
                assert!((scaled - scaled.round()).abs() < 1e-9);
                assert_eq!(r.recommendation, r.verdict.recommendation());
            }
        }
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(Verdict::from_score(25.0), Verdict::Excellent);
        assert_eq!(Verdict::from_score(24.5), Verdict::Good);
        assert_eq!(Verdict::from_score(18.0), Verdict::Good);
        assert_eq!(Verdict::from_score(12.0), Verdict::Average);
        assert_eq!(Verdict::from_score(11.5), Verdict::BelowAverage);
    }

    #[test]
    fn rejects_out_of_range_moon() {
        let bad = PersonMoon::new("B", 360.0);
        assert!(ashtakoot_match(&bad, &PersonMoon::new("G", 10.0)).is_err());
    }
}
