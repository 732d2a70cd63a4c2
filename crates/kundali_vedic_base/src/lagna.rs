//! Lagna (Ascendant) and MC (Midheaven).
//!
//! Standard spherical astronomy (Meeus ch. 13):
//!
//! ```text
//! Asc = atan2(cos(LST), -(sin(LST)·cos(ε) + tan(φ)·sin(ε)))
//! MC  = atan2(sin(LST), cos(LST)·cos(ε))
//! ```
//!
//! LST comes from GMST plus east longitude, ε is the IAU 2006 mean
//! obliquity of date. Both results are tropical; the caller's ayanamsha
//! is subtracted to get sidereal values.

use std::f64::consts::TAU;

use kundali_frames::mean_obliquity_deg;
use kundali_time::{julian_centuries, local_sidereal_time_rad};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Tropical ascendant longitude in radians [0, 2π).
pub fn lagna_from_lst_rad(lst_rad: f64, latitude_rad: f64, obliquity_rad: f64) -> f64 {
    // eastern intersection; the bare tan form lands on the descendant
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * obliquity_rad.cos() + latitude_rad.tan() * obliquity_rad.sin()),
    );
    asc.rem_euclid(TAU)
}

/// Tropical MC longitude in radians [0, 2π).
pub fn mc_from_lst_rad(lst_rad: f64, obliquity_rad: f64) -> f64 {
    f64::atan2(lst_rad.sin(), lst_rad.cos() * obliquity_rad.cos()).rem_euclid(TAU)
}

/// Chart angles at an instant, sidereal unless named otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    pub ascendant_tropical_deg: f64,
    pub lst_deg: f64,
    pub obliquity_deg: f64,
}

/// Sidereal ascendant and MC for a UTC Julian date and geographic location.
///
/// `ayanamsha_deg` is the correction already evaluated for `jd_utc`.
/// Latitude must lie in [-90, 90] and longitude in [-180, 180]. Any
/// non-finite intermediate is reported as `CalculationDivergence`.
pub fn ascendant_and_mc_deg(
    jd_utc: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    ayanamsha_deg: f64,
) -> Result<Angles, VedicError> {
    if !jd_utc.is_finite() || !ayanamsha_deg.is_finite() {
        return Err(VedicError::InvalidInput(format!(
            "non-finite epoch or ayanamsha (jd {jd_utc}, ayanamsha {ayanamsha_deg})"
        )));
    }
    if !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(VedicError::InvalidInput(format!(
            "latitude {latitude_deg} outside [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(VedicError::InvalidInput(format!(
            "longitude {longitude_deg} outside [-180, 180]"
        )));
    }

    let lst = local_sidereal_time_rad(jd_utc, longitude_deg.to_radians());
    let eps_deg = mean_obliquity_deg(julian_centuries(jd_utc));
    let eps = eps_deg.to_radians();
    let asc = lagna_from_lst_rad(lst, latitude_deg.to_radians(), eps).to_degrees();
    let mc = mc_from_lst_rad(lst, eps).to_degrees();

    if !asc.is_finite() || !mc.is_finite() {
        return Err(VedicError::CalculationDivergence(format!(
            "ascendant not finite at jd {jd_utc}, latitude {latitude_deg}"
        )));
    }

    Ok(Angles {
        ascendant_deg: normalize_360(asc - ayanamsha_deg),
        mc_deg: normalize_360(mc - ayanamsha_deg),
        ascendant_tropical_deg: asc,
        lst_deg: lst.to_degrees(),
        obliquity_deg: eps_deg,
    })
}
