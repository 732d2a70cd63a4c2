//! Whole-sign houses.
//!
//! House k occupies the sign `asc_sign + (k - 1)`. A body's house number is
//! counted in 30° steps from the ascendant degree:
//! `floor(((lon - asc) mod 360) / 30) + 1`.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{check_longitude, normalize_360};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// 1..=12.
    pub house: u8,
    pub rashi: Rashi,
    /// Sidereal longitude where the house sign starts.
    pub start_degree: f64,
}

/// The 12 houses for a sidereal ascendant. Each sign appears exactly once.
pub fn whole_sign_houses(ascendant_deg: f64) -> Result<[House; 12], VedicError> {
    let asc = check_longitude(ascendant_deg)?;
    let first = rashi_from_longitude(asc).rashi;
    Ok(std::array::from_fn(|i| {
        let rashi = first.offset(i as i32);
        House {
            house: i as u8 + 1,
            rashi,
            start_degree: rashi.index() as f64 * 30.0,
        }
    }))
}

/// House number 1..=12 of a sidereal longitude relative to the ascendant.
pub fn house_of(longitude_deg: f64, ascendant_deg: f64) -> Result<u8, VedicError> {
    let lon = check_longitude(longitude_deg)?;
    let asc = check_longitude(ascendant_deg)?;
    let diff = normalize_360(lon - asc);
    Ok(((diff / 30.0).floor() as u8).min(11) + 1)
}
