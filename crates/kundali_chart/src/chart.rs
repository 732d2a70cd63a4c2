//! Birth chart assembly: positions, ascendant and whole-sign houses.

use kundali_core::Ephemeris;
use kundali_vedic_base::{
    AyanamshaSystem, Graha, House, Nakshatra, Rashi, ascendant_and_mc_deg, ayanamsha_deg,
    nakshatra_from_longitude, rashi_from_longitude, whole_sign_houses,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ChartError;
use crate::positions::{PlanetPosition, sidereal_states};
use crate::request::ChartRequest;

/// The rising point, placed like a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ascendant {
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    pub norm_degree: f64,
    pub sign: Rashi,
    pub sign_index: u8,
    pub sign_lord: Graha,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

impl Ascendant {
    fn at(longitude: f64) -> Self {
        let rashi = rashi_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        Self {
            longitude,
            norm_degree: rashi.degrees_in_rashi,
            sign: rashi.rashi,
            sign_index: rashi.rashi.number(),
            sign_lord: rashi.rashi.lord(),
            nakshatra: nak.nakshatra,
            pada: nak.pada,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChart {
    pub jd_utc: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub ayanamsha: AyanamshaSystem,
    pub ayanamsha_value: f64,
    pub ascendant: Ascendant,
    /// Sidereal midheaven; informative only.
    pub midheaven: f64,
    /// The nine grahas in chart order.
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<House>,
}

impl BirthChart {
    pub fn planet(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.name == graha)
    }

    pub fn moon(&self) -> Result<&PlanetPosition, ChartError> {
        self.planet(Graha::Moon)
            .ok_or_else(|| ChartError::InvalidInput("chart has no Moon position".into()))
    }

    /// `(graha, sidereal longitude)` pairs in chart order.
    pub fn longitudes(&self) -> impl Iterator<Item = (Graha, f64)> + '_ {
        self.planets.iter().map(|p| (p.name, p.full_degree))
    }
}

/// Compute a chart for a UTC Julian date and location.
pub fn chart_at(
    oracle: &dyn Ephemeris,
    jd_utc: f64,
    latitude: f64,
    longitude: f64,
    system: AyanamshaSystem,
) -> Result<BirthChart, ChartError> {
    let aya = ayanamsha_deg(system, jd_utc)?;
    let angles = ascendant_and_mc_deg(jd_utc, latitude, longitude, aya)?;
    debug!(
        ascendant = angles.ascendant_deg,
        lst = angles.lst_deg,
        obliquity = angles.obliquity_deg,
        "ascendant computed"
    );

    let planets = sidereal_states(oracle, jd_utc, system)?
        .iter()
        .map(|s| PlanetPosition::place(s, angles.ascendant_deg))
        .collect::<Result<Vec<_>, _>>()?;
    let houses = whole_sign_houses(angles.ascendant_deg)?.to_vec();
    debug!(planets = planets.len(), "positions placed");

    let chart = BirthChart {
        jd_utc,
        latitude,
        longitude,
        ayanamsha: system,
        ayanamsha_value: aya,
        ascendant: Ascendant::at(angles.ascendant_deg),
        midheaven: angles.mc_deg,
        planets,
        houses,
    };
    info!(
        jd_utc,
        ascendant_sign = %chart.ascendant.sign,
        ayanamsha = system.name(),
        "chart computed"
    );
    Ok(chart)
}

/// Compute a chart from a validated birth request.
pub fn compute_chart(oracle: &dyn Ephemeris, request: &ChartRequest) -> Result<BirthChart, ChartError> {
    let jd = request.jd_utc()?;
    chart_at(oracle, jd, request.latitude, request.longitude, request.ayanamsha)
}
