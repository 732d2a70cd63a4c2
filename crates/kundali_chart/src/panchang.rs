//! Daily panchang for a civil date and place.
//!
//! The five limbs are read at 12:00 UTC of the date. Sunrise and sunset
//! use the local timezone.

use kundali_core::Ephemeris;
use kundali_time::{LocalDateTime, calendar_to_jd};
use kundali_vedic_base::{
    AyanamshaSystem, Graha, KaranaInfo, MoonNakshatra, Rashi, Ritu, SunTimes, TithiInfo, Vara,
    YogaInfo, approximate_sun_times, ayanamsha_deg, panchang_at,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ChartError;
use crate::format::{noon_utc_jd, round_dp};
use crate::positions::sidereal_states;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanchangRequest {
    pub year: i32,
    pub month: u32,
    #[serde(alias = "date")]
    pub day: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: f64,
    #[serde(default)]
    pub ayanamsha: AyanamshaSystem,
}

impl PanchangRequest {
    pub fn validate(&self) -> Result<(), ChartError> {
        let local = LocalDateTime {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: 12,
            minute: 0,
            second: 0,
            tz_hours: self.timezone,
        };
        let result = local.validate().map_err(ChartError::from).and_then(|()| {
            if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude) {
                return Err(ChartError::InvalidInput(format!(
                    "location ({}, {}) out of range",
                    self.latitude, self.longitude
                )));
            }
            Ok(())
        });
        if let Err(e) = &result {
            warn!(error = %e, "panchang request rejected");
        }
        result
    }

    /// 1-based day of the year.
    pub fn day_of_year(&self) -> u32 {
        let jd = calendar_to_jd(self.year, self.month, self.day as f64);
        let jan1 = calendar_to_jd(self.year, 1, 1.0);
        (jd - jan1).round() as u32 + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangReport {
    pub date: String,
    pub jd_utc: f64,
    pub vara: Vara,
    pub ritu: Ritu,
    pub tithi: TithiInfo,
    pub nakshatra: MoonNakshatra,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub sun_sign: Rashi,
    pub moon_sign: Rashi,
    pub sun_longitude: f64,
    pub moon_longitude: f64,
    #[serde(flatten)]
    pub sun_times: SunTimes,
    pub ayanamsha: AyanamshaSystem,
    pub ayanamsha_value: f64,
}

pub fn panchang_report(
    oracle: &dyn Ephemeris,
    request: &PanchangRequest,
) -> Result<PanchangReport, ChartError> {
    request.validate()?;
    let jd = noon_utc_jd(request.year, request.month, request.day)?;
    let states = sidereal_states(oracle, jd, request.ayanamsha)?;
    let longitude_of = |g: Graha| {
        states
            .iter()
            .find(|s| s.graha == g)
            .map(|s| s.longitude)
            .ok_or_else(|| ChartError::InvalidInput(format!("no {g} position")))
    };
    let sun = longitude_of(Graha::Sun)?;
    let moon = longitude_of(Graha::Moon)?;

    let info = panchang_at(sun, moon, jd)?;
    debug!(tithi = %info.tithi.tithi, elongation = info.elongation, "panchang computed");

    Ok(PanchangReport {
        date: format!("{:04}-{:02}-{:02}", request.year, request.month, request.day),
        jd_utc: jd,
        vara: info.vara,
        ritu: Ritu::from_month(request.month),
        tithi: info.tithi,
        nakshatra: info.nakshatra,
        yoga: info.yoga,
        karana: info.karana,
        sun_sign: info.sun_rashi,
        moon_sign: info.moon_rashi,
        sun_longitude: round_dp(sun, 4),
        moon_longitude: round_dp(moon, 4),
        sun_times: approximate_sun_times(
            request.day_of_year(),
            request.latitude,
            request.longitude,
            request.timezone,
        ),
        ayanamsha: request.ayanamsha,
        ayanamsha_value: round_dp(ayanamsha_deg(request.ayanamsha, jd)?, 6),
    })
}
