//! Rahu and Ketu from the mean lunar node.
//!
//! Rahu is the Moon's mean ascending node, evaluated with the IERS Ω
//! polynomial (`kundali_frames::mean_lunar_node_deg`). Ketu is always
//! exactly opposite. Both move retrograde at the mean rate.

use kundali_frames::{MEAN_NODE_RATE_DEG_PER_DAY, mean_lunar_node_deg};
use kundali_time::julian_centuries;
use serde::{Deserialize, Serialize};

use crate::ayanamsha::{AyanamshaSystem, tropical_to_sidereal};
use crate::error::VedicError;
use crate::util::normalize_360;

/// Mean node speed, about −0.05295°/day (−19.34°/yr).
pub const MEAN_NODE_SPEED_DEG_PER_DAY: f64 = MEAN_NODE_RATE_DEG_PER_DAY;

/// Tropical longitude of mean Rahu at a Julian date.
pub fn mean_rahu_tropical_deg(jd: f64) -> Result<f64, VedicError> {
    if !jd.is_finite() {
        return Err(VedicError::InvalidInput(format!("non-finite Julian date {jd}")));
    }
    Ok(mean_lunar_node_deg(julian_centuries(jd)))
}

/// Sidereal node pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarNodes {
    pub rahu_deg: f64,
    pub ketu_deg: f64,
    /// Shared by both nodes; always negative.
    pub speed_deg_per_day: f64,
}

impl LunarNodes {
    /// Build from a sidereal Rahu longitude.
    pub fn from_rahu(rahu_deg: f64) -> Self {
        let rahu_deg = normalize_360(rahu_deg);
        Self {
            rahu_deg,
            ketu_deg: normalize_360(rahu_deg + 180.0),
            speed_deg_per_day: MEAN_NODE_SPEED_DEG_PER_DAY,
        }
    }

    /// Sidereal mean nodes at a Julian date.
    pub fn mean_at(jd: f64, system: AyanamshaSystem) -> Result<Self, VedicError> {
        let tropical = mean_rahu_tropical_deg(jd)?;
        Ok(Self::from_rahu(tropical_to_sidereal(tropical, jd, system)?))
    }
}
