//! Sidereal positions of the nine grahas.
//!
//! The seven physical bodies come from the oracle as tropical longitudes and
//! are corrected by the ayanamsha evaluated once for the instant. Rahu and
//! Ketu come from the mean lunar node.

use kundali_core::{Body, Ephemeris};
use kundali_vedic_base::{
    ALL_GRAHAS, AyanamshaSystem, Graha, LunarNodes, Nakshatra, Rashi, ayanamsha_deg, house_of,
    nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChartError;

/// Oracle body for a graha; `None` for the nodes.
pub const fn body_of(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Sun => Some(Body::Sun),
        Graha::Moon => Some(Body::Moon),
        Graha::Mars => Some(Body::Mars),
        Graha::Mercury => Some(Body::Mercury),
        Graha::Jupiter => Some(Body::Jupiter),
        Graha::Venus => Some(Body::Venus),
        Graha::Saturn => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sidereal longitude and rate of one graha at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrahaState {
    pub graha: Graha,
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    /// Degrees per day; negative when retrograde.
    pub speed: f64,
}

impl GrahaState {
    pub fn is_retro(&self) -> bool {
        self.speed < 0.0
    }
}

/// Observe one physical graha and correct it to sidereal.
fn observe_graha(
    oracle: &dyn Ephemeris,
    graha: Graha,
    body: Body,
    jd_utc: f64,
    ayanamsha: f64,
) -> Result<GrahaState, ChartError> {
    let obs = oracle.observe(body, jd_utc)?;
    if !obs.is_finite() {
        return Err(ChartError::CalculationDivergence(format!(
            "{} returned a non-finite observation for {body} at JD {jd_utc}",
            oracle.name()
        )));
    }
    Ok(GrahaState {
        graha,
        longitude: normalize_360(obs.longitude_deg - ayanamsha),
        speed: obs.speed_deg_per_day,
    })
}

/// All nine grahas in chart order at a UTC Julian date.
///
/// Fails as a whole if any single observation fails.
pub fn sidereal_states(
    oracle: &dyn Ephemeris,
    jd_utc: f64,
    system: AyanamshaSystem,
) -> Result<Vec<GrahaState>, ChartError> {
    let aya = ayanamsha_deg(system, jd_utc)?;
    let nodes = LunarNodes::mean_at(jd_utc, system)?;
    debug!(oracle = oracle.name(), jd_utc, ayanamsha = aya, "observing grahas");

    ALL_GRAHAS
        .into_iter()
        .map(|graha| match (graha, body_of(graha)) {
            (_, Some(body)) => observe_graha(oracle, graha, body, jd_utc, aya),
            (Graha::Rahu, None) => Ok(GrahaState {
                graha,
                longitude: nodes.rahu_deg,
                speed: nodes.speed_deg_per_day,
            }),
            (_, None) => Ok(GrahaState {
                graha,
                longitude: nodes.ketu_deg,
                speed: nodes.speed_deg_per_day,
            }),
        })
        .collect()
}

/// Sidereal Moon longitude only.
pub fn moon_longitude(
    oracle: &dyn Ephemeris,
    jd_utc: f64,
    system: AyanamshaSystem,
) -> Result<f64, ChartError> {
    let aya = ayanamsha_deg(system, jd_utc)?;
    Ok(observe_graha(oracle, Graha::Moon, Body::Moon, jd_utc, aya)?.longitude)
}

/// A graha fully placed in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub name: Graha,
    /// Sidereal longitude, [0, 360).
    pub full_degree: f64,
    /// Degrees within the sign.
    pub norm_degree: f64,
    pub speed: f64,
    pub is_retro: bool,
    pub sign: Rashi,
    /// 1..=12.
    pub sign_index: u8,
    pub sign_lord: Graha,
    pub nakshatra: Nakshatra,
    /// 1..=27.
    pub nakshatra_index: u8,
    pub nakshatra_lord: Graha,
    pub pada: u8,
    /// Whole-sign house, 1..=12.
    pub house: u8,
}

impl PlanetPosition {
    pub fn place(state: &GrahaState, ascendant_deg: f64) -> Result<Self, ChartError> {
        let rashi = rashi_from_longitude(state.longitude);
        let nak = nakshatra_from_longitude(state.longitude);
        Ok(Self {
            name: state.graha,
            full_degree: state.longitude,
            norm_degree: rashi.degrees_in_rashi,
            speed: state.speed,
            is_retro: state.is_retro(),
            sign: rashi.rashi,
            sign_index: rashi.rashi.number(),
            sign_lord: rashi.rashi.lord(),
            nakshatra: nak.nakshatra,
            nakshatra_index: nak.nakshatra.number(),
            nakshatra_lord: nak.nakshatra.lord(),
            pada: nak.pada,
            house: house_of(state.longitude, ascendant_deg)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_core::{EphemerisError, Observation};

    struct Constant(f64);

    impl Ephemeris for Constant {
        fn observe(&self, body: Body, _jd: f64) -> Result<Observation, EphemerisError> {
            if body == Body::Earth {
                return Err(EphemerisError::UnknownBody("earth".into()));
            }
            Ok(Observation {
                longitude_deg: self.0,
                latitude_deg: 0.0,
                distance_au: 1.0,
                speed_deg_per_day: if body == Body::Saturn { -0.02 } else { 1.0 },
            })
        }
    }

    #[test]
    fn nine_states_in_chart_order() {
        let jd = kundali_time::J2000_JD;
        let states = sidereal_states(&Constant(100.0), jd, AyanamshaSystem::Lahiri).unwrap();
        let order: Vec<_> = states.iter().map(|s| s.graha).collect();
        assert_eq!(order, ALL_GRAHAS.to_vec());

        let aya = ayanamsha_deg(AyanamshaSystem::Lahiri, jd).unwrap();
        assert!((states[0].longitude - (100.0 - aya)).abs() < 1e-9);
        assert!(states[6].is_retro());
        assert!(!states[0].is_retro());
        assert!(states[7].is_retro() && states[8].is_retro());
        let gap = normalize_360(states[8].longitude - states[7].longitude);
        assert!((gap - 180.0).abs() < 1e-9);
    }

    #[test]
    fn small_tropical_longitude_wraps() {
        let states =
            sidereal_states(&Constant(5.0), kundali_time::J2000_JD, AyanamshaSystem::Lahiri)
                .unwrap();
        assert!(states[0].longitude > 330.0 && states[0].longitude < 360.0);
    }

    #[test]
    fn non_finite_observation_fails() {
        let err = sidereal_states(&Constant(f64::NAN), kundali_time::J2000_JD, Default::default())
            .unwrap_err();
        assert!(matches!(err, ChartError::CalculationDivergence(_)));
    }

    #[test]
    fn placement_fields() {
        let state = GrahaState {
            graha: Graha::Jupiter,
            longitude: 95.5,
            speed: 0.1,
        };
        let p = PlanetPosition::place(&state, 5.0).unwrap();
        assert_eq!(p.sign, Rashi::Cancer);
        assert_eq!(p.sign_index, 4);
        assert_eq!(p.sign_lord, Graha::Moon);
        assert!((p.norm_degree - 5.5).abs() < 1e-9);
        assert_eq!(p.nakshatra, Nakshatra::Pushya);
        assert_eq!(p.nakshatra_index, 8);
        assert_eq!(p.nakshatra_lord, Graha::Saturn);
        assert_eq!(p.pada, 1);
        assert_eq!(p.house, 4);
    }
}
