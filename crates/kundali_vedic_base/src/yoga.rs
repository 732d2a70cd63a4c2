//! Yoga detection over sign and house placements.
//!
//! Rules run in a fixed order: Pancha Mahapurusha, Raja, Gaja Kesari,
//! Dhana, Neecha Bhanga. A rule that needs a body missing from the input
//! is skipped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bhava::house_of;
use crate::dignity::{exaltation_rashi, is_debilitated, is_exalted, is_own_sign};
use crate::error::VedicError;
use crate::graha::Graha;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{check_longitude, sign_count};
use crate::yoga_types::{StrengthCounts, Yoga, YogaCategory, YogaStrength};

const KENDRAS: [u8; 4] = [1, 4, 7, 10];
const TRIKONAS: [u8; 3] = [1, 5, 9];
const JUPITER_WEALTH_HOUSES: [u8; 4] = [2, 5, 9, 11];

const MAHAPURUSHA: [(Graha, &str, &str); 5] = [
    (Graha::Mars, "Ruchaka", "Courage, leadership, authority in military/police"),
    (Graha::Mercury, "Bhadra", "Intelligence, eloquence, business acumen"),
    (Graha::Jupiter, "Hamsa", "Wisdom, spirituality, teaching ability"),
    (Graha::Venus, "Malavya", "Beauty, luxury, artistic talents, pleasures"),
    (
        Graha::Saturn,
        "Shasha",
        "Power through discipline, longevity, success through hard work",
    ),
];

/// Ascendant plus sidereal longitudes of the bodies to examine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YogaInput {
    pub ascendant_deg: f64,
    pub bodies: Vec<(Graha, f64)>,
}

impl YogaInput {
    pub fn new(ascendant_deg: f64) -> Self {
        Self {
            ascendant_deg,
            bodies: Vec::new(),
        }
    }

    pub fn with(mut self, graha: Graha, longitude_deg: f64) -> Self {
        self.bodies.push((graha, longitude_deg));
        self
    }
}

/// Where one body sits, as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YogaPlacement {
    pub graha: Graha,
    pub longitude: f64,
    pub rashi: Rashi,
    pub house: u8,
    pub is_exalted: bool,
    pub is_debilitated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YogaSummary {
    pub total_yogas: usize,
    pub by_strength: StrengthCounts,
    pub has_mahapurusha: bool,
    pub has_raja_yoga: bool,
    pub has_dhana_yoga: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YogaReport {
    pub ascendant_rashi: Rashi,
    pub placements: Vec<YogaPlacement>,
    pub yogas: Vec<Yoga>,
    pub summary: YogaSummary,
}

impl YogaReport {
    /// Yogas grouped by category, detection order kept within each group.
    pub fn categories(&self) -> BTreeMap<YogaCategory, Vec<&Yoga>> {
        let mut map: BTreeMap<YogaCategory, Vec<&Yoga>> = BTreeMap::new();
        for y in &self.yogas {
            map.entry(y.category).or_default().push(y);
        }
        map
    }
}

struct Chart {
    asc: Rashi,
    placements: Vec<YogaPlacement>,
}

impl Chart {
    fn get(&self, graha: Graha) -> Option<&YogaPlacement> {
        self.placements.iter().find(|p| p.graha == graha)
    }

    /// Lord of the sign occupying `house`.
    fn house_lord(&self, house: u8) -> Graha {
        self.asc.offset(house as i32 - 1).lord()
    }

    /// Lords of `houses`, first occurrence kept.
    fn distinct_lords(&self, houses: &[u8]) -> Vec<Graha> {
        let mut lords = Vec::with_capacity(houses.len());
        for &h in houses {
            let lord = self.house_lord(h);
            if !lords.contains(&lord) {
                lords.push(lord);
            }
        }
        lords
    }
}

fn yoga(
    name: impl Into<String>,
    category: YogaCategory,
    planets: Vec<Graha>,
    description: impl Into<String>,
    effect: &str,
    strength: YogaStrength,
) -> Yoga {
    Yoga {
        name: name.into(),
        category,
        planets,
        description: description.into(),
        effect: effect.to_string(),
        strength,
    }
}

fn pancha_mahapurusha(chart: &Chart, out: &mut Vec<Yoga>) {
    for (graha, name, effect) in MAHAPURUSHA {
        let Some(p) = chart.get(graha) else { continue };
        let dignified = is_own_sign(graha, p.rashi) || exaltation_rashi(graha) == Some(p.rashi);
        if KENDRAS.contains(&p.house) && dignified {
            out.push(yoga(
                format!("{name} Yoga"),
                YogaCategory::Mahapurusha,
                vec![graha],
                format!("{graha} in kendra in own sign/exaltation"),
                effect,
                YogaStrength::VeryStrong,
            ));
        }
    }
}

fn raja(chart: &Chart, out: &mut Vec<Yoga>) {
    let kendra_lords = chart.distinct_lords(&KENDRAS);
    let trikona_lords = chart.distinct_lords(&TRIKONAS);
    for &kl in &kendra_lords {
        for &tl in &trikona_lords {
            if kl == tl {
                continue;
            }
            let (Some(k), Some(t)) = (chart.get(kl), chart.get(tl)) else {
                continue;
            };
            if k.rashi == t.rashi {
                out.push(yoga(
                    format!("Raja Yoga ({kl}-{tl})"),
                    YogaCategory::Raja,
                    vec![kl, tl],
                    format!("Kendra lord {kl} conjunct Trikona lord {tl}"),
                    "Rise in status, power, authority, and recognition",
                    YogaStrength::Strong,
                ));
            }
        }
    }
}

fn gaja_kesari(chart: &Chart, out: &mut Vec<Yoga>) {
    let (Some(moon), Some(jupiter)) = (chart.get(Graha::Moon), chart.get(Graha::Jupiter)) else {
        return;
    };
    let distance = sign_count(moon.rashi.index(), jupiter.rashi.index());
    if KENDRAS.contains(&distance) {
        let strength = if distance == 1 {
            YogaStrength::Strong
        } else {
            YogaStrength::Moderate
        };
        out.push(yoga(
            "Gaja Kesari Yoga",
            YogaCategory::Prosperity,
            vec![Graha::Moon, Graha::Jupiter],
            "Jupiter in kendra from Moon",
            "Fame, wisdom, good memory, learning ability, and respected status",
            strength,
        ));
    }
}

fn dhana(chart: &Chart, out: &mut Vec<Yoga>) {
    let second = chart.house_lord(2);
    let eleventh = chart.house_lord(11);
    if let (Some(s), Some(e)) = (chart.get(second), chart.get(eleventh)) {
        if s.rashi == e.rashi {
            out.push(yoga(
                "Dhana Yoga (2nd-11th)",
                YogaCategory::Dhana,
                vec![second, eleventh],
                format!("2nd lord {second} conjunct 11th lord {eleventh}"),
                "Accumulation of wealth and prosperity",
                YogaStrength::Strong,
            ));
        } else if KENDRAS.contains(&s.house) && KENDRAS.contains(&e.house) {
            out.push(yoga(
                "Dhana Yoga (Kendra)",
                YogaCategory::Dhana,
                vec![second, eleventh],
                "2nd and 11th lords in Kendras",
                "Good financial growth and stability",
                YogaStrength::Moderate,
            ));
        }
    }

    if let Some(j) = chart.get(Graha::Jupiter) {
        if JUPITER_WEALTH_HOUSES.contains(&j.house) {
            out.push(yoga(
                "Jupiter Wealth Yoga",
                YogaCategory::Dhana,
                vec![Graha::Jupiter],
                format!("Jupiter in house {}", j.house),
                "Natural abundance and good fortune with money",
                YogaStrength::Moderate,
            ));
        }
    }
}

fn neecha_bhanga(chart: &Chart, out: &mut Vec<Yoga>) {
    for p in chart.placements.iter().filter(|p| !p.graha.is_node() && p.is_debilitated) {
        let lord = p.rashi.lord();
        let Some(l) = chart.get(lord) else { continue };
        if KENDRAS.contains(&l.house) {
            out.push(yoga(
                "Neecha Bhanga Raja Yoga",
                YogaCategory::Raja,
                vec![p.graha, lord],
                format!("{}'s debilitation cancelled by {lord} in kendra", p.graha),
                "Tremendous rise after initial struggles, turning weakness to strength",
                YogaStrength::Strong,
            ));
        }
    }
}

/// Run every rule over the chart.
///
/// Each body may appear at most once and every longitude must lie in
/// [0, 360).
pub fn detect_yogas(input: &YogaInput) -> Result<YogaReport, VedicError> {
    let asc_deg = check_longitude(input.ascendant_deg)?;
    let asc = rashi_from_longitude(asc_deg).rashi;

    let mut placements: Vec<YogaPlacement> = Vec::with_capacity(input.bodies.len());
    for &(graha, lon) in &input.bodies {
        if placements.iter().any(|p| p.graha == graha) {
            return Err(VedicError::InvalidInput(format!("{graha} listed twice")));
        }
        let lon = check_longitude(lon)?;
        let rashi = rashi_from_longitude(lon).rashi;
        placements.push(YogaPlacement {
            graha,
            longitude: lon,
            rashi,
            house: house_of(lon, asc_deg)?,
            is_exalted: is_exalted(graha, rashi),
            is_debilitated: is_debilitated(graha, rashi),
        });
    }

    let chart = Chart { asc, placements };
    let mut yogas = Vec::new();
    pancha_mahapurusha(&chart, &mut yogas);
    raja(&chart, &mut yogas);
    gaja_kesari(&chart, &mut yogas);
    dhana(&chart, &mut yogas);
    neecha_bhanga(&chart, &mut yogas);

    let has = |c: YogaCategory| yogas.iter().any(|y| y.category == c);
    let summary = YogaSummary {
        total_yogas: yogas.len(),
        by_strength: StrengthCounts::tally(&yogas),
        has_mahapurusha: has(YogaCategory::Mahapurusha),
        has_raja_yoga: has(YogaCategory::Raja),
        has_dhana_yoga: has(YogaCategory::Dhana),
    };

    Ok(YogaReport {
        ascendant_rashi: asc,
        placements: chart.placements,
        yogas,
        summary,
    })
}
