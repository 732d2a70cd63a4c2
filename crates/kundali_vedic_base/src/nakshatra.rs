//! Nakshatra (lunar mansion) and pada lookup.
//!
//! 27 equal mansions of 13°20′ from sidereal 0°, each split into four
//! padas of 3°20′. Lords follow the Vimshottari cycle Ketu, Venus, Sun,
//! Moon, Mars, Rahu, Jupiter, Saturn, Mercury, repeated three times.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;

/// 360 / 27 degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// 360 / 108 degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Nakshatra lords in Vimshottari order.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Venus,
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Rahu,
    Graha::Jupiter,
    Graha::Saturn,
    Graha::Mercury,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini = 1).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Vimshottari lord: `VIMSHOTTARI_LORDS[index mod 9]`.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[(self.index() % 9) as usize]
    }

    /// Sidereal longitude where this nakshatra begins.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nakshatra placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada 1..=4.
    pub pada: u8,
    /// Degrees traversed within the nakshatra, [0, 13.333…).
    pub degrees_in_nakshatra: f64,
}

impl NakshatraInfo {
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn progress(&self) -> f64 {
        self.degrees_in_nakshatra / NAKSHATRA_SPAN
    }
}

/// Nakshatra and pada of a sidereal longitude. Input is normalized first.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // count whole padas first: lon·108/360 is exact at round-degree boundaries
    let quarter = ((lon * 108.0 / 360.0).floor() as u8).min(107);
    let idx = quarter / 4;
    let within = (lon - idx as f64 * NAKSHATRA_SPAN).max(0.0);
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        pada: quarter % 4 + 1,
        degrees_in_nakshatra: within,
    }
}
