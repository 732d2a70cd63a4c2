//! The nine grahas and sign lordship.
//!
//! Seven grahas are physical bodies observed through the ephemeris; Rahu and
//! Ketu are the lunar nodes, computed rather than observed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::Rashi;

/// The nine grahas in weekday-lord order followed by the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine grahas in chart order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
    Graha::Rahu,
    Graha::Ketu,
];

/// The seven classical grahas (nodes excluded).
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
];

impl Graha {
    /// English name, as used in chart output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Buddh",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Jupiter, Saturn and the nodes: transits that shape months, not days.
    pub const fn is_slow(self) -> bool {
        matches!(self, Self::Jupiter | Self::Saturn | Self::Rahu | Self::Ketu)
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Graha {
    type Err = VedicError;

    /// Accepts English or Sanskrit names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_GRAHAS
            .into_iter()
            .find(|g| {
                g.name().eq_ignore_ascii_case(wanted) || g.sanskrit_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| VedicError::InvalidInput(format!("unknown graha '{wanted}'")))
    }
}

/// Planetary lord of a rashi.
///
/// - Aries/Scorpio → Mars
/// - Taurus/Libra → Venus
/// - Gemini/Virgo → Mercury
/// - Cancer → Moon
/// - Leo → Sun
/// - Sagittarius/Pisces → Jupiter
/// - Capricorn/Aquarius → Saturn
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Aries | Rashi::Scorpio => Graha::Mars,
        Rashi::Taurus | Rashi::Libra => Graha::Venus,
        Rashi::Gemini | Rashi::Virgo => Graha::Mercury,
        Rashi::Cancer => Graha::Moon,
        Rashi::Leo => Graha::Sun,
        Rashi::Sagittarius | Rashi::Pisces => Graha::Jupiter,
        Rashi::Capricorn | Rashi::Aquarius => Graha::Saturn,
    }
}
