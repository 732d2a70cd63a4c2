//! Earth Rotation Angle, Greenwich Mean Sidereal Time and local sidereal time.
//!
//! Inputs are UTC Julian Dates, used as UT1 (|UT1 − UTC| < 0.9 s, about
//! 0.004° of sidereal angle).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15. Public domain.
//! - GMST polynomial: Capitaine et al. 2003, Table 2. Public domain.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD − 2451545.0
pub fn earth_rotation_angle_rad(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    // split the day count so the fractional turn keeps its precision
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    (TAU * turns.rem_euclid(1.0)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
/// − 0.000029956·T⁴ − 0.0000000368·T⁵)″
pub fn gmst_rad(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (earth_rotation_angle_rad(jd) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time in radians for an observer at `longitude_east_rad`.
pub fn local_sidereal_time_rad(jd: f64, longitude_east_rad: f64) -> f64 {
    (gmst_rad(jd) + longitude_east_rad).rem_euclid(TAU)
}
