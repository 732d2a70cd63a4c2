//! Daily sign horoscope ratings from whole-sign transits.

use kundali_core::Ephemeris;
use kundali_vedic_base::{
    ALL_RASHIS, AyanamshaSystem, Rashi, Ratings, SignTransit, rashi_from_longitude, sign_ratings,
};
use serde::Serialize;
use tracing::debug;

use crate::error::ChartError;
use crate::format::{noon_utc_jd, round_dp, utc_date};
use crate::positions::{GrahaState, sidereal_states};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignHoroscope {
    pub sign: Rashi,
    pub date: String,
    pub transits: Vec<SignTransit>,
    pub ratings: Ratings,
}

/// Read the sky once against one natal sign.
pub fn horoscope_from_states(sign: Rashi, date: String, states: &[GrahaState]) -> SignHoroscope {
    let transits: Vec<_> = states
        .iter()
        .map(|s| {
            let info = rashi_from_longitude(s.longitude);
            SignTransit::new(
                s.graha,
                info.rashi,
                round_dp(info.degrees_in_rashi, 2),
                sign,
                s.is_retro(),
            )
        })
        .collect();
    let ratings = sign_ratings(&transits);
    SignHoroscope {
        sign,
        date,
        transits,
        ratings,
    }
}

fn noon_states(
    oracle: &dyn Ephemeris,
    year: i32,
    month: u32,
    day: u32,
    system: AyanamshaSystem,
) -> Result<(String, Vec<GrahaState>), ChartError> {
    let jd = noon_utc_jd(year, month, day)?;
    let states = sidereal_states(oracle, jd, system)?;
    Ok((utc_date(jd)?, states))
}

/// Ratings for one sign, with transits taken at 12:00 UTC of the date.
pub fn sign_horoscope(
    oracle: &dyn Ephemeris,
    sign: Rashi,
    year: i32,
    month: u32,
    day: u32,
    system: AyanamshaSystem,
) -> Result<SignHoroscope, ChartError> {
    let (date, states) = noon_states(oracle, year, month, day, system)?;
    let h = horoscope_from_states(sign, date, &states);
    debug!(sign = %sign, overall = h.ratings.overall, "horoscope rated");
    Ok(h)
}

/// All twelve signs from one set of observations.
pub fn all_sign_horoscopes(
    oracle: &dyn Ephemeris,
    year: i32,
    month: u32,
    day: u32,
    system: AyanamshaSystem,
) -> Result<Vec<SignHoroscope>, ChartError> {
    let (date, states) = noon_states(oracle, year, month, day, system)?;
    Ok(ALL_RASHIS
        .into_iter()
        .map(|sign| horoscope_from_states(sign, date.clone(), &states))
        .collect())
}
