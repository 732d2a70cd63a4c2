//! Transit aspects of the current sky against a natal chart.

use kundali_core::Ephemeris;
use kundali_time::UtcTime;
use kundali_vedic_base::{
    AspectKind, AspectNature, AspectOrbs, Graha, Significance, TransitTone, find_aspect,
    significance_for, significations, transit_effect,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::chart::BirthChart;
use crate::error::ChartError;
use crate::format::round_dp;
use crate::positions::{GrahaState, sidereal_states};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveTransit {
    pub transit_planet: Graha,
    pub transit_longitude: f64,
    pub natal_planet: Graha,
    pub natal_longitude: f64,
    pub aspect: AspectKind,
    pub nature: AspectNature,
    pub exactness: f64,
    pub orb: f64,
    pub effect: &'static str,
    pub significance: Significance,
    pub significations: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitSummary {
    pub total_aspects: usize,
    pub major_transits: usize,
    pub challenging_count: usize,
    pub harmonious_count: usize,
    pub overall_tone: TransitTone,
    pub interpretation: &'static str,
}

impl TransitSummary {
    /// Tone counts only critical and major transits.
    pub fn of(transits: &[ActiveTransit]) -> Self {
        let major: Vec<_> = transits.iter().filter(|t| t.significance.is_major()).collect();
        let count = |n: AspectNature| major.iter().filter(|t| t.nature == n).count();
        let challenging_count = count(AspectNature::Challenging);
        let harmonious_count = count(AspectNature::Harmonious);
        let overall_tone = TransitTone::from_counts(challenging_count, harmonious_count);
        Self {
            total_aspects: transits.len(),
            major_transits: major.len(),
            challenging_count,
            harmonious_count,
            overall_tone,
            interpretation: overall_tone.interpretation(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitReport {
    pub transit_jd: f64,
    pub transit_time: String,
    pub current_positions: Vec<GrahaState>,
    pub active_transits: Vec<ActiveTransit>,
    pub summary: TransitSummary,
}

/// Every transiting graha against every natal graha.
///
/// Sorted by significance (critical first), then by exactness descending.
pub fn aspects_between(
    transiting: &[GrahaState],
    natal: &[(Graha, f64)],
    orbs: &AspectOrbs,
) -> Result<Vec<ActiveTransit>, ChartError> {
    orbs.validate()?;
    let mut found = Vec::new();
    for t in transiting {
        for &(natal_planet, natal_lon) in natal {
            let Some(m) = find_aspect(t.longitude, natal_lon, orbs)? else {
                continue;
            };
            let transit = ActiveTransit {
                transit_planet: t.graha,
                transit_longitude: round_dp(t.longitude, 4),
                natal_planet,
                natal_longitude: round_dp(natal_lon, 4),
                aspect: m.kind,
                nature: m.nature,
                exactness: round_dp(m.exactness, 2),
                orb: round_dp(m.orb, 2),
                effect: transit_effect(m.nature, t.graha),
                significance: significance_for(t.graha, m.exactness),
                significations: significations(t.graha),
            };
            found.push((m.exactness, transit));
        }
    }
    found.sort_by(|(ea, a), (eb, b)| {
        a.significance
            .cmp(&b.significance)
            .then_with(|| eb.total_cmp(ea))
    });
    Ok(found.into_iter().map(|(_, t)| t).collect())
}

/// Transits at `transit_jd` against `natal`, in the natal chart's ayanamsha.
pub fn transit_report(
    oracle: &dyn Ephemeris,
    natal: &BirthChart,
    transit_jd: f64,
    orbs: &AspectOrbs,
) -> Result<TransitReport, ChartError> {
    let transit_time = UtcTime::from_jd(transit_jd)?.to_string();
    let current_positions = sidereal_states(oracle, transit_jd, natal.ayanamsha)?;
    let natal_lons: Vec<_> = natal.longitudes().collect();
    let active_transits = aspects_between(&current_positions, &natal_lons, orbs)?;
    debug!(aspects = active_transits.len(), "transit aspects found");

    let summary = TransitSummary::of(&active_transits);
    info!(
        transit_time = %transit_time,
        tone = ?summary.overall_tone,
        major = summary.major_transits,
        "transits computed"
    );
    Ok(TransitReport {
        transit_jd,
        transit_time,
        current_positions,
        active_transits,
        summary,
    })
}
