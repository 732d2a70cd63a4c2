//! Shared angle helpers.

use crate::error::VedicError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Accept a longitude only if it is finite and already in [0, 360).
pub fn check_longitude(lon: f64) -> Result<f64, VedicError> {
    if lon.is_finite() && (0.0..360.0).contains(&lon) {
        Ok(lon)
    } else {
        Err(VedicError::InvalidLongitude(lon))
    }
}

/// Inclusive sign count from `from` to `to`, 1..=12 (same sign is 1).
pub fn sign_count(from_index: u8, to_index: u8) -> u8 {
    ((to_index as i16 - from_index as i16).rem_euclid(12) + 1) as u8
}
