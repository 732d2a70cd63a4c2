//! Rashi (sidereal sign) lookup and degree formatting.
//!
//! The sidereal ecliptic is divided into 12 signs of 30° starting at
//! Aries 0°. Sign index is `floor(lon / 30)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::{Graha, rashi_lord};
use crate::util::normalize_360;

/// The 12 rashis from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Aries,
    Rashi::Taurus,
    Rashi::Gemini,
    Rashi::Cancer,
    Rashi::Leo,
    Rashi::Virgo,
    Rashi::Libra,
    Rashi::Scorpio,
    Rashi::Sagittarius,
    Rashi::Capricorn,
    Rashi::Aquarius,
    Rashi::Pisces,
];

/// Classical element (tattva) of a sign, cycling Fire, Earth, Air, Water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrischika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    /// 0-based index (Aries = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Aries = 1).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Sign for a 0-based index, wrapping modulo 12.
    pub const fn from_index(idx: u8) -> Self {
        ALL_RASHIS[(idx % 12) as usize]
    }

    /// Sign for a 1-based number 1..=12.
    pub fn from_number(n: u8) -> Result<Self, VedicError> {
        if (1..=12).contains(&n) {
            Ok(ALL_RASHIS[(n - 1) as usize])
        } else {
            Err(VedicError::InvalidInput(format!("rashi number {n} outside 1..=12")))
        }
    }

    /// The sign `steps` signs forward (negative steps go backward).
    pub const fn offset(self, steps: i32) -> Self {
        ALL_RASHIS[(self as i32 + steps).rem_euclid(12) as usize]
    }

    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Odd signs (Aries, Gemini, …) counting from 1.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }
}

impl fmt::Display for Rashi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rashi {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_RASHIS
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(wanted) || r.sanskrit_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| VedicError::InvalidInput(format!("unknown rashi '{wanted}'")))
    }
}

/// Degrees-minutes-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Decimal degrees to DMS. Negative input is taken by absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem = (d - degrees as f64) * 60.0;
    let minutes = rem.floor() as u8;
    Dms {
        degrees,
        minutes,
        seconds: (rem - minutes as f64) * 60.0,
    }
}

/// Sign placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Sign of a sidereal longitude. Input is normalized first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // floating edge just below 360 must still land in Pisces
    let idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - idx as f64 * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}
